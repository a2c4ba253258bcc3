// src/main.rs
use anyhow::Result;
use newsroom_core::application::{
    hooks::HookRegistry, ports::time::Clock, services::ApplicationServices,
};
use newsroom_core::config::AppConfig;
use newsroom_core::domain::{
    collection::CollectionCatalog, jobs::JobAccessPolicy, media::MediaUrlBuilder,
};
use newsroom_core::infrastructure::time::SystemClock;
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(
        environment = config.environment().as_str(),
        server_url = config.server_url(),
        origins = ?config.allowed_origins(),
        "configuration loaded"
    );

    let catalog = Arc::new(CollectionCatalog::editorial()?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let registry = Arc::new(HookRegistry::for_catalog(
        &catalog,
        MediaUrlBuilder::new(config.media_base_url()),
        clock,
    ));
    tracing::info!(
        collections = catalog.collections().len(),
        slugged = catalog.slugged().count(),
        "collection catalog validated"
    );

    let services = Arc::new(ApplicationServices::new(
        catalog,
        registry,
        JobAccessPolicy::new(config.cron_secret().map(str::to_owned)),
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => tracing::error!(error = %err, "failed to install terminate handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
