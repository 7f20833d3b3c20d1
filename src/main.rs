use adboard_backend_rs::{
    app::App,
    types::{StartupError, ToContext},
    utils::config::Config,
};
use std::{path::PathBuf, process::ExitCode, sync::Arc};
use tracing_subscriber::{prelude::*, EnvFilter};

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Takes the `.env` load result so the filter sees any `RUST_LOG` it set.
fn init_tracing(env_file: dotenvy::Result<PathBuf>) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(log_filter())
        .init();

    match env_file {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(err) => tracing::debug!("No .env file loaded: {}", err),
    }
}

async fn run() -> Result<(), StartupError> {
    let ctx = Arc::new(Config::from_env()?.to_context().await?);

    App::new(ctx.clone()).serve().await?;

    ctx.db_conn.pool.close().await;
    tracing::info!("Database pool closed");

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing(dotenvy::dotenv());

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
