//! # kpiscorerd — KPI scorer dashboard daemon
//!
//! Composition root that wires the dashboard bootstrap into the HTTP host
//! and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` logging
//! - Resolve the logo asset path once, relative to the executable
//! - Construct the bootstrap services and the HTTP host state
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no rendering logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use kpiscorer_adapter_http_axum::assets::FsAssetLocator;
use kpiscorer_adapter_http_axum::host::HostSettings;
use kpiscorer_adapter_http_axum::router;
use kpiscorer_adapter_http_axum::state::AppState;
use kpiscorer_app::services::bootstrap::DashboardBootstrap;
use kpiscorer_domain::branding::Branding;
use kpiscorer_domain::logo::LogoAssetPath;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.logging.filter);

    // Assets
    let base_dir = config.base_dir()?;
    let logo = LogoAssetPath::under(&base_dir)?;
    let settings = HostSettings::new(logo.assets_dir());
    tracing::info!(logo = %logo.as_path().display(), "resolved logo asset");

    // Services
    let bootstrap = DashboardBootstrap::with_branding(&Branding::default(), logo, FsAssetLocator)?;

    // HTTP
    let app = router::build(AppState::new(bootstrap, settings));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!("kpiscorerd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("kpiscorerd stopped");
    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?}: {err}, falling back to `info`");
        EnvFilter::new("info")
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
