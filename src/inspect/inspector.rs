use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::common::schema::ColumnInfo;

#[derive(Clone)]
pub struct SchemaInspector {
    pool: SqlitePool,
}

impl SchemaInspector {
    pub fn new(pool: SqlitePool) -> Self {
        SchemaInspector { pool }
    }

    /// Columns of `table` in declaration order. A missing table has no columns.
    pub async fn table_columns(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        let rows = sqlx::query(
            "SELECT cid, name, type, \"notnull\", dflt_value, pk
             FROM pragma_table_info(?1)
             ORDER BY cid",
        )
        .bind(table)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to read schema of table {}", table))?;

        let columns = rows
            .iter()
            .map(ColumnInfo::from_row)
            .collect::<Result<Vec<_>>>()?;

        for column in &columns {
            debug!(
                "{}.{} #{} {} not_null={} default={:?} pk={}",
                table,
                column.name,
                column.cid,
                column.data_type,
                column.not_null,
                column.default_value,
                column.primary_key
            );
        }

        Ok(columns)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use tempfile::tempdir;

    use super::*;

    async fn pool_with(statements: &[&str]) -> (tempfile::TempDir, SqlitePool) {
        let dir = tempdir().unwrap();
        let options = SqliteConnectOptions::new()
            .filename(dir.path().join("test.db"))
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();

        for statement in statements {
            sqlx::query(statement).execute(&pool).await.unwrap();
        }

        (dir, pool)
    }

    #[tokio::test]
    async fn reads_columns_in_declaration_order() {
        let (_dir, pool) = pool_with(&[
            "CREATE TABLE Settings (id INTEGER PRIMARY KEY, theme TEXT NOT NULL DEFAULT 'light', allowRegistration BOOLEAN)",
        ])
        .await;

        let columns = SchemaInspector::new(pool)
            .table_columns("Settings")
            .await
            .unwrap();

        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "theme", "allowRegistration"]);

        assert_eq!(columns[0].primary_key, 1);
        assert_eq!(columns[0].data_type, "INTEGER");
        assert!(columns[1].not_null);
        assert_eq!(columns[1].default_value.as_deref(), Some("'light'"));
        assert_eq!(columns[2].default_value, None);
    }

    #[tokio::test]
    async fn missing_table_has_no_columns() {
        let (_dir, pool) = pool_with(&["CREATE TABLE Users (id INTEGER)"]).await;

        let columns = SchemaInspector::new(pool)
            .table_columns("Settings")
            .await
            .unwrap();

        assert!(columns.is_empty());
    }

    #[tokio::test]
    async fn table_name_is_not_interpolated() {
        let (_dir, pool) = pool_with(&["CREATE TABLE \"odd'name\" (value TEXT)"]).await;

        let columns = SchemaInspector::new(pool)
            .table_columns("odd'name")
            .await
            .unwrap();

        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].name, "value");
    }
}
