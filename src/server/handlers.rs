//! HTTP handlers for the `/api` routes

use crate::core::error::ApiResult;
use crate::core::model::{
    NewProperty, NewTenant, PaymentToggle, Property, Snapshot, Tenant, TenantPatch,
};
use crate::core::service::RentalService;
use crate::server::extract::{ApiJson, ApiPath};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn RentalService>,
}

/// Body returned by operations with nothing else to report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub async fn get_all_data(State(state): State<AppState>) -> ApiResult<Json<Snapshot>> {
    Ok(Json(state.service.snapshot().await?))
}

pub async fn add_tenant(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewTenant>,
) -> ApiResult<(StatusCode, Json<Tenant>)> {
    let tenant = state.service.add_tenant(payload).await?;
    Ok((StatusCode::CREATED, Json(tenant)))
}

pub async fn update_tenant(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(patch): ApiJson<TenantPatch>,
) -> ApiResult<Json<Tenant>> {
    Ok(Json(state.service.update_tenant(id, patch).await?))
}

pub async fn delete_tenant(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.service.delete_tenant(id).await?;
    Ok(Json(MessageResponse::new("Tenant deleted successfully")))
}

pub async fn add_property(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewProperty>,
) -> ApiResult<(StatusCode, Json<Property>)> {
    let property = state.service.add_property(payload).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

pub async fn delete_property(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.service.delete_property(id).await?;
    Ok(Json(MessageResponse::new("Property deleted successfully")))
}

pub async fn toggle_payment(
    State(state): State<AppState>,
    ApiJson(toggle): ApiJson<PaymentToggle>,
) -> ApiResult<Json<MessageResponse>> {
    state.service.toggle_payment(toggle).await?;
    Ok(Json(MessageResponse::new("Payment status updated successfully")))
}
