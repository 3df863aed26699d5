use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use mergington_activities::config::Settings;
use mergington_activities::database::activity_store::ActivityStore;
use mergington_activities::database::seed;
use mergington_activities::logging;
use mergington_activities::web;

#[tokio::main]
async fn main() {
    dotenv().ok();
    logging::init_logging();

    if let Err(e) = run().await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> mergington_activities::Result<()> {
    let settings = Settings::from_env()?;

    // 1. Registry
    let registry = match &settings.seed_file {
        Some(path) => seed::load_seed_file(path)?,
        None => seed::default_registry(),
    };
    info!(activities = registry.len(), "Activity registry ready");
    let store = ActivityStore::new(registry);

    // 2. Router
    let app = web::router(store, &settings.static_dir);

    // 3. Bind (with fallback port)
    let addr = settings.addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = settings.fallback_addr()?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(
        build = env!("MERGINGTON_BUILD_ID"),
        "Server listening on http://{}", bound_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
