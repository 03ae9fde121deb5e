use crate::{
    error::ApiError,
    handlers::messages::{create_message, delete_message, list_messages, update_message},
};
use axum::{
    routing::{get, patch},
    Router,
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

pub fn create_app(pool: SqlitePool) -> Router {
    let state = AppState { pool };

    Router::new()
        .route(
            "/messages",
            get(list_messages)
                .post(create_message)
                .fallback(method_not_allowed),
        )
        .route(
            "/messages/:id",
            patch(update_message)
                .delete(delete_message)
                .fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
