//! Shared response envelope types for API handlers.
//!
//! All API responses wrap their payload in a `{ "success": ..., ... }`
//! envelope. Use [`DataResponse`] / [`MessageResponse`] instead of ad-hoc
//! `serde_json::json!` blocks to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "message": ... }` envelope for delete-style endpoints
/// with no payload to return.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
