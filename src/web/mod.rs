//! HTTP front end.
//!
//! Routes requests to the functions in [`views`] and turns their results
//! into HTTP responses:
//!
//! - `GET /` renders the homepage
//! - `GET /lists/<id>/` renders one list, 404 if it does not exist
//! - `POST /lists/new` starts a list from `item_text` and redirects to it
//! - `POST /lists/<id>/add_item` appends `item_text` and redirects back
//!
//! The store is a single SQLite connection behind a mutex. A handler holds
//! the lock only for its synchronous store calls.

pub mod error;
pub mod views;

use anyhow::{Context, Result};
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::net::TcpListener;
use tokio::signal;

use crate::render::Renderer;
use crate::storage::Database;

pub use error::WebError;
pub use views::{ItemForm, ViewResponse};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Database>>,
    renderer: Arc<dyn Renderer>,
}

impl AppState {
    pub fn new(db: Database, renderer: impl Renderer + 'static) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            renderer: Arc::new(renderer),
        }
    }

    fn db(&self) -> Result<MutexGuard<'_, Database>, WebError> {
        self.db.lock().map_err(|_| WebError::LockPoisoned)
    }
}

impl IntoResponse for ViewResponse {
    fn into_response(self) -> Response {
        match self {
            ViewResponse::Html(body) => Html(body).into_response(),
            ViewResponse::Redirect(location) => {
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/lists/new", post(new_list))
        .route("/lists/:id/", get(view_list))
        .route("/lists/:id/add_item", post(add_item))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Serves the application on `addr` until Ctrl+C is received.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down...");
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;
    tracing::debug!(%method, %uri, status = response.status().as_u16(), "Handled request");
    response
}

async fn home_page(State(state): State<AppState>) -> Result<ViewResponse, WebError> {
    views::home_page(state.renderer.as_ref())
}

async fn view_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ViewResponse, WebError> {
    let db = state.db()?;
    views::view_list(&db, state.renderer.as_ref(), &id)
}

async fn new_list(
    State(state): State<AppState>,
    form: Result<Form<ItemForm>, FormRejection>,
) -> Result<ViewResponse, WebError> {
    let Form(form) = form.map_err(|e| WebError::BadForm(e.body_text()))?;
    let db = state.db()?;
    views::new_list(&db, &form)
}

async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<ItemForm>, FormRejection>,
) -> Result<ViewResponse, WebError> {
    let Form(form) = form.map_err(|e| WebError::BadForm(e.body_text()))?;
    let db = state.db()?;
    views::add_item(&db, &id, &form)
}
