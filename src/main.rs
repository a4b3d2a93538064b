use household_ledger::app_state::AppState;
use household_ledger::auth::IdentityVerifier;
use household_ledger::routes;
use std::path::Path;
use std::time::Duration;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::error;
use tracing::info;
use tracing::warn;

#[tokio::main]
async fn main() {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // identity provider client; server still starts without it, but every
    // API request is answered with 503 until it is configured
    let identity = IdentityVerifier::from_env();
    if identity.is_none() {
        warn!(
            "Identity provider not configured. Set IDENTITY_API_KEY or IDENTITY_ENDPOINT; \
             API requests will be answered with 503 until then."
        );
    }

    // open the per-collection stores
    let db_dir = dotenv::var("DB_DIR").unwrap_or_else(|_| "db".to_string());
    let app_state = match AppState::open(Path::new(&db_dir), identity) {
        Ok(state) => state,
        Err(e) => {
            error!("Error opening document stores: {:#?}", e);
            return;
        }
    };

    // build our application with its routes
    let app = routes::app(app_state).layer((
        TraceLayer::new_for_http(),
        // Graceful shutdown will wait for outstanding requests to complete. Add a timeout so
        // requests don't hang forever.
        TimeoutLayer::new(Duration::from_secs(10)),
    ));

    let port = dotenv::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Error binding port {}: {:#?}", port, e);
            return;
        }
    };
    info!("Server running on port {}", port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {:#?}", e);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down.");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down.");
        },
    }
}
