use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

/// Builds the full HTTP surface on top of a ready context.
pub fn router(ctx: Arc<Context>) -> Router {
    modules::get_router()
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(cors::Any),
        )
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for the shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received, draining connections");
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = router(ctx.clone());

        Self { ctx, router }
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let listener = TcpListener::bind((self.ctx.app.host.as_str(), self.ctx.app.port)).await?;

        tracing::info!("App is running on {}:{}", self.ctx.app.host, self.ctx.app.port);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
