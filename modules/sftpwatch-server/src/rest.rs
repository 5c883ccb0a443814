use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::AppState;

/// Opaque status line consumed by the status console.
pub async fn api_test(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let count = state.registry.all().await.len();
    format!("sftpwatch management interface ok ({count} instance(s) registered)")
}

/// Registered instances as JSON.
pub async fn api_instances(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.registry.all().await)
}
