//! Request/response schemas and the unified API envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::transfer::LedgerError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// All responses share this envelope: code 0 = success, non-zero = error.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Wrap a payload in a success envelope.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

// ============================================================================
// API Errors
// ============================================================================

/// Error with a stable HTTP status and error code, so clients can tell
/// "retry yourself" (503) from "fix your request" (400/404) from
/// "not permitted" (403).
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error_codes::ACCOUNT_NOT_FOUND, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL, msg)
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, error_codes::TRANSIENT, msg)
    }

    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<serde_json::Value> {
            code: self.code,
            msg: self.msg,
            data: None,
        };
        (self.status, Json(body)).into_response()
    }
}

pub mod error_codes {
    pub const INTERNAL: i32 = 1000;
    pub const BAD_REQUEST: i32 = 1001;
    pub const SAME_ACCOUNT: i32 = 1002;
    pub const PERMISSION_DENIED: i32 = 1003;
    pub const ACCOUNT_NOT_FOUND: i32 = 1004;
    pub const INSUFFICIENT_FUNDS: i32 = 1005;
    pub const TRANSIENT: i32 = 1006;
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        use LedgerError::*;
        match &err {
            InvalidAmount => Self::new(StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST, err.to_string()),
            SameAccount => Self::new(StatusCode::BAD_REQUEST, error_codes::SAME_ACCOUNT, err.to_string()),
            PermissionDenied => Self::new(
                StatusCode::FORBIDDEN,
                error_codes::PERMISSION_DENIED,
                err.to_string(),
            ),
            AccountNotFound(_) => Self::new(
                StatusCode::NOT_FOUND,
                error_codes::ACCOUNT_NOT_FOUND,
                err.to_string(),
            ),
            InsufficientFunds => Self::new(
                StatusCode::BAD_REQUEST,
                error_codes::INSUFFICIENT_FUNDS,
                err.to_string(),
            ),
            TransientStore(_) => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                error_codes::TRANSIENT,
                "Database transaction error, try again later",
            ),
            Internal(detail) => {
                // Detail is logged, never exposed to the caller.
                tracing::error!("Internal ledger error: {}", detail);
                Self::internal("Internal server error")
            }
        }
    }
}

// ============================================================================
// Request Schemas
// ============================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferRequest {
    pub from_account: i64,
    pub to_account: i64,
    #[schema(value_type = f64, example = 50.0)]
    pub amount: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DepositWithdrawRequest {
    pub account_id: i64,
    #[schema(value_type = f64, example = 100.0)]
    pub amount: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    pub customer_id: i64,
    #[schema(value_type = f64, example = 1000.0)]
    pub initial_deposit: Decimal,
}

// ============================================================================
// Response Schemas
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct TransferResponse {
    pub transaction_id: i64,
    /// Commit timestamp of the ledger entry (ISO 8601).
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MutationResponse {
    pub account_id: i64,
    #[schema(value_type = String, example = "1100.00")]
    pub new_balance: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceResponse {
    pub customer_id: i64,
    pub account_id: i64,
    #[schema(value_type = String, example = "1000.00")]
    pub balance: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateAccountResponse {
    pub account_id: i64,
    pub customer_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_error_status_mapping() {
        let cases = [
            (LedgerError::InvalidAmount, StatusCode::BAD_REQUEST),
            (LedgerError::SameAccount, StatusCode::BAD_REQUEST),
            (LedgerError::PermissionDenied, StatusCode::FORBIDDEN),
            (LedgerError::AccountNotFound(9), StatusCode::NOT_FOUND),
            (LedgerError::InsufficientFunds, StatusCode::BAD_REQUEST),
            (LedgerError::TransientStore(3), StatusCode::SERVICE_UNAVAILABLE),
            (
                LedgerError::Internal(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_internal_detail_is_not_exposed() {
        let api_err = ApiError::from(LedgerError::Internal(sqlx::Error::PoolTimedOut));
        assert_eq!(api_err.msg, "Internal server error");
    }

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(body["code"], 0);
        assert_eq!(body["msg"], "ok");
        assert_eq!(body["data"], 42);
    }
}
