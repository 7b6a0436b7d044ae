//! Documentation of a minimal portfolio site.
//!
//!
//!
//! # Pages
//! - `/` landing page, no auth
//! - `/portfolio` list of uploaded PDFs, upload form when logged in
//! - `/login` form, `POST /login` checks the credential table
//! - `/logout` forgets the logged in user
//! - `POST /upload_pdf` multipart upload, field `pdf_file`, `.pdf` names only
//! - `/uploads/{filename}` and `/static/...` served straight from disk
//!
//!
//!
//! # Sessions
//!
//! Server-side, in-memory session store with an opaque id cookie that lives for
//! the browser session. The session holds the logged in username and a queue of
//! one-shot notices shown on the next portfolio render.
//!
//! Logins rotate the session id. There is no server-side timeout, a restart
//! drops every session along with the article list.
//!
//!
//!
//! # Notes
//!
//! ## Login failures
//! A failed login answers `200` with plain text rather than a `401` or a
//! redirect. Existing clients key off that text.
//!
//! ## Filenames
//! Uploads keep the client's filename so re-uploading `report.pdf` overwrites
//! the file on disk but still adds a second article. Names with path
//! separators or `..` are refused like any other non-PDF upload.
//!
//!
//!
//! # Setup
//!
//! Run with defaults, port 5000 and `static/uploads`.
//! ```sh
//! cargo run -p portfolio-site
//! ```
//!
//! Override.
//! ```sh
//! RUST_PORT=8080 UPLOAD_DIR=/var/lib/portfolio RUST_LOG=debug cargo run -p portfolio-site
//! ```
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod articles;
pub mod auth;
pub mod config;
pub mod error;
pub mod flash;
pub mod routes;
pub mod state;
pub mod storage;
pub mod utils;
pub mod views;

use config::Config;
use error::AppError;
use routes::{
    home_handler, login_form_handler, login_handler, logout_handler, portfolio_handler,
    upload_handler,
};
use state::AppState;

pub async fn start_server() -> Result<(), AppError> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config)?;

    info!("Starting server...");

    let address = state.config.address();
    let app = app(state);

    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    let sessions = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_expiry(Expiry::OnSessionEnd);

    Router::new()
        .route("/", get(home_handler))
        .route("/portfolio", get(portfolio_handler))
        .route("/login", get(login_form_handler).post(login_handler))
        .route("/logout", get(logout_handler))
        .route("/upload_pdf", post(upload_handler))
        .nest_service("/uploads", ServeDir::new(state.files.root()))
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
