pub use crate::utils::database;
use crate::utils::config::{Config, ConfigError};
use async_trait::async_trait;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

/// Shared per-process state handed to every handler through axum's `State`.
#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db_conn: database::DatabaseConnection,
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, StartupError>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, StartupError> {
        let db_conn = database::connect(&self.database).await?;
        database::migrate(&db_conn).await?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            db_conn,
        })
    }
}
