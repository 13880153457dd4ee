mod api_doc;
mod config;
mod handlers;
mod models;
mod routes;
mod server;

use config::Config;
use utoipa::OpenApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("static-responder starting");

    let config = Config::default();
    config.log_startup();

    for path in api_doc::ApiDoc::openapi().paths.paths.keys() {
        tracing::info!("  Route registered: {}", path);
    }

    if let Err(e) = server::run(&config).await {
        tracing::error!("Server failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
