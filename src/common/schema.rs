use anyhow::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// One row of `pragma_table_info`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub cid: i64,
    pub name: String,
    pub data_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub primary_key: i64,
}

impl ColumnInfo {
    pub fn from_row(row: &SqliteRow) -> Result<Self> {
        let cid = row.try_get::<i64, _>("cid")?;
        let name = row.try_get::<String, _>("name")?;
        let data_type = row
            .try_get::<Option<String>, _>("type")?
            .unwrap_or_default();
        let not_null = row.try_get::<i64, _>("notnull")? != 0;
        let default_value = row.try_get::<Option<String>, _>("dflt_value")?;
        let primary_key = row.try_get::<i64, _>("pk")?;

        Ok(ColumnInfo {
            cid,
            name,
            data_type,
            not_null,
            default_value,
            primary_key,
        })
    }
}
