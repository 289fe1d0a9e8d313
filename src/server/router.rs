//! Route table

use crate::server::handlers::{
    AppState, add_property, add_tenant, delete_property, delete_tenant, get_all_data,
    toggle_payment, update_tenant,
};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};

/// Build the `/api` routes:
///
/// - GET    /api/data
/// - POST   /api/tenants
/// - PUT    /api/tenants/{id}
/// - DELETE /api/tenants/{id}
/// - POST   /api/properties
/// - DELETE /api/properties/{id}
/// - POST   /api/payments/toggle
pub fn build_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/data", get(get_all_data))
        .route("/api/tenants", post(add_tenant))
        .route("/api/tenants/{id}", put(update_tenant).delete(delete_tenant))
        .route("/api/properties", post(add_property))
        .route("/api/properties/{id}", delete(delete_property))
        .route("/api/payments/toggle", post(toggle_payment))
        .with_state(state)
}

/// Health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "rentdesk"
    }))
}
