//! JSON status API consumed by the display surface

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::controller::RefreshController;

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub controller: Arc<RefreshController>,
}

/// Build the status API router
pub fn build_router(controller: Arc<RefreshController>) -> Router {
    let dashboard_state = DashboardState { controller };

    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/refresh", post(refresh_handler))
        .route("/health", get(health_handler))
        .with_state(dashboard_state)
}

async fn status_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    Json(dashboard.controller.snapshot().await)
}

async fn refresh_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    dashboard.controller.force_refresh().await;
    Json(dashboard.controller.snapshot().await)
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
