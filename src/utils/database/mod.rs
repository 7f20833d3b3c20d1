mod entity;

pub use entity::{get_item, Entity};

use crate::utils::{config::DatabaseConfig, error::Error};
use sqlx::{
    migrate::MigrateError,
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool, Postgres, Transaction,
};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
}

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options(config))
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!(
                "Error connecting to database {}:{}/{}: {}",
                config.host,
                config.port,
                config.name,
                err
            );
            err
        })
}

/// Builds a pool that opens connections on first use.
pub fn connect_lazy(config: &DatabaseConfig) -> DatabaseConnection {
    DatabaseConnection {
        pool: PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(connect_options(config)),
    }
}

/// Creates the `users` and `advertisements` tables if they are absent.
pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), MigrateError> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("Failed to run database migrations: {}", err);
        err
    })
}

/// Opens the transaction that scopes one request's writes.
pub async fn begin(db_conn: &DatabaseConnection) -> Result<Transaction<'static, Postgres>, Error> {
    db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        Error::from(err)
    })
}

pub async fn commit(tx: Transaction<'_, Postgres>) -> Result<(), Error> {
    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        Error::from(err)
    })
}
