use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;

pub struct SqliteConnection {
    pub pool: SqlitePool,
}

#[async_trait]
pub trait DatabaseConnection: Sized {
    async fn new(path: &Path) -> Result<Self>;

    async fn close(self);
}

#[async_trait]
impl DatabaseConnection for SqliteConnection {
    async fn new(path: &Path) -> Result<Self> {
        // Read-only and never created: inspecting must not touch the file.
        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false)
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(SqliteConnection { pool })
    }

    async fn close(self) {
        self.pool.close().await;
    }
}

pub struct DatabaseConnectionFactory<C: DatabaseConnection> {
    path: PathBuf,
    connection_type: std::marker::PhantomData<C>,
}

impl<C: DatabaseConnection> DatabaseConnectionFactory<C> {
    pub fn new(path: PathBuf) -> Self {
        DatabaseConnectionFactory {
            path,
            connection_type: std::marker::PhantomData,
        }
    }

    pub async fn create_connection(&self) -> Result<C> {
        C::new(&self.path).await
    }
}
