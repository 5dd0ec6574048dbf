//! Person Directory Server
//!
//! CRUD over a single `individuos` table, exposed as a small JSON API.
//!
//! Uses SQLite (embedded) through sqlx.

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;
pub mod storage;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use services::PersonDirectory;
use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub persons: Arc<PersonDirectory>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        let persons = Arc::new(PersonDirectory::new(db.clone()));
        Self { db, persons }
    }
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .route(
            "/persons",
            get(handlers::persons::list).post(handlers::persons::create),
        )
        .route(
            "/persons/:id",
            get(handlers::persons::get)
                .put(handlers::persons::update)
                .delete(handlers::persons::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
