mod router;
pub mod server;
mod state;
pub mod tracing;

pub use router::main_router;
pub use state::AppState;

use crate::config;
use crate::error::AppError;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), AppError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        let port = std::env::var("HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(crate::healthcheck::DEFAULT_HTTP_PORT);
        match crate::healthcheck_with_port(port).await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings =
        config::get_configuration().map_err(|e| AppError::Config(e.to_string()))?;
    ::tracing::info!(
        http_port = settings.http_port,
        top_k = settings.top_k,
        model = %settings.predict_model,
        version = %settings.predict_version,
        "Loaded settings"
    );

    let app_state = AppState::from_settings(&settings)?;
    let app = main_router(app_state);

    server::serve(app, settings.http_port).await
}
