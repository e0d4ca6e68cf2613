use std::sync::Arc;

use new_releases::{build_router, Catalog, Config, Dashboard};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    init_tracing(config.log_json);

    let catalog = Catalog::load(&config.catalog_path, config.page_size).inspect_err(|err| {
        error!(error = %err, "catalog unavailable");
    })?;
    let dashboard = Dashboard::new(Arc::new(catalog), config.posters.clone(), config.metrics_shift);

    let listener = TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, shift = ?config.metrics_shift, "new releases dashboard listening");

    axum::serve(listener, build_router(dashboard))
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}
