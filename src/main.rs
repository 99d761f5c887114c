use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;

use content_generator_service::config::Settings;
use content_generator_service::server::{create_app, AppState};
use content_generator_service::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing
    init_tracing(&settings.logging)?;

    for (section, values) in settings.sections()? {
        let keys = values.as_object().map_or(0, |entries| entries.len());
        tracing::info!(section = %section, keys, "Configuration section loaded");
    }

    // A failed check is reported but does not stop the server
    if settings.validate() {
        tracing::info!(debug = settings.app.debug, "Configuration validated");
    }

    let addr = settings.server_addr();
    let state = AppState::new(settings);
    tracing::info!(styles = ?state.generator.catalog().styles(), "Template catalog loaded");

    // Create Axum app
    let app = create_app(state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal_handler())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal_handler() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
