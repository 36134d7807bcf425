//! HTTP gateway: axum router, role extraction and request plumbing.
//!
//! Each request runs as its own tokio task; handlers coordinate only through
//! the store, never through in-process locks.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    Router,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::Role;
use state::AppState;

/// Header carrying the employee role. The fronting access gate terminates
/// the bearer credential and forwards the resolved role here; this service
/// trusts the header and applies only the rank check.
pub const ROLE_HEADER: &str = "x-employee-role";

/// Caller role extracted from the request. Missing or unrecognized values
/// degrade to `Role::Unknown` (rank 0) and fail the per-route rank checks.
pub struct CallerRole(pub Role);

impl<S> FromRequestParts<S> for CallerRole
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(Role::from_name)
            .unwrap_or(Role::Unknown);
        Ok(CallerRole(role))
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::accounts::health))
        .route("/view-customers", get(handlers::accounts::view_customers))
        .route(
            "/view-accounts/{customer_id}",
            get(handlers::accounts::view_accounts),
        )
        .route("/accounts", post(handlers::accounts::create_account))
        .route(
            "/accounts/{account_id}/balance",
            get(handlers::accounts::get_balance),
        )
        .route(
            "/accounts/{account_id}/transactions",
            get(handlers::transfer::get_transactions),
        )
        .route("/deposit", post(handlers::transfer::deposit_money))
        .route("/withdraw", post(handlers::transfer::withdraw_money))
        .route("/transfer", post(handlers::transfer::transfer_money))
        .with_state(state);

    api.merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
    )
}

pub async fn serve(state: Arc<AppState>, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Gateway listening on {}", addr);

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn role_from_header(value: Option<&str>) -> Role {
        let mut builder = Request::builder().uri("/");
        if let Some(v) = value {
            builder = builder.header(ROLE_HEADER, v);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        let CallerRole(role) = CallerRole::from_request_parts(&mut parts, &()).await.unwrap();
        role
    }

    #[tokio::test]
    async fn test_role_extraction() {
        assert_eq!(role_from_header(Some("manager")).await, Role::Manager);
        assert_eq!(role_from_header(Some("ADMIN")).await, Role::Admin);
        assert_eq!(role_from_header(Some("janitor")).await, Role::Unknown);
        assert_eq!(role_from_header(None).await, Role::Unknown);
    }
}
