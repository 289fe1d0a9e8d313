//! Axum extractors whose rejections render as [`ApiError`]
//!
//! The stock `Json` and `Path` extractors answer malformed input with a
//! plain-text body. These wrappers turn the same failures into a
//! `400 {"error": ...}` response.

use crate::core::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
