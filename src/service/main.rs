use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contacts::config::ServiceConfig;
use contacts::http::http_router;
use contacts::persistence::JsonFilePersistence;
use contacts::services::ContactService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    let config = ServiceConfig::from_env()?;

    let contact_persistence = Box::new(JsonFilePersistence::new(&config.data_file));
    let contact_service = Arc::new(ContactService::new(contact_persistence));

    let router = http_router(Arc::clone(&contact_service));

    tracing::info!(
        "contacts api listening on {} with store {}",
        config.endpoint,
        config.data_file.display()
    );

    axum::Server::bind(&config.endpoint)
        .serve(router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }

    tracing::info!("shutting down");
}
