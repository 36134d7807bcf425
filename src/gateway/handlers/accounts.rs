//! Customer and account handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;

use crate::account::{Account, AccountRepository, Customer, CustomerRepository};
use crate::auth::{Role, require_role};
use crate::gateway::CallerRole;
use crate::gateway::state::AppState;
use crate::gateway::types::{
    ApiError, ApiResult, BalanceResponse, CreateAccountRequest, CreateAccountResponse, ok,
};
use crate::transfer::LedgerError;

/// Liveness probe backed by `SELECT 1`.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and store are healthy"),
        (status = 503, description = "Store unreachable")
    ),
    tag = "General"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> ApiResult<String> {
    state.db.health_check().await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        ApiError::service_unavailable("Database unavailable")
    })?;
    ok("ok".to_string())
}

/// List all customers.
#[utoipa::path(
    get,
    path = "/view-customers",
    responses(
        (status = 200, description = "All customers", body = [Customer]),
        (status = 403, description = "Caller is not an employee")
    ),
    tag = "Accounts"
)]
pub async fn view_customers(
    State(state): State<Arc<AppState>>,
    CallerRole(caller): CallerRole,
) -> ApiResult<Vec<Customer>> {
    require_role(caller, Role::Teller)?;

    let customers = CustomerRepository::list_all(state.db.pool())
        .await
        .map_err(LedgerError::from)?;
    ok(customers)
}

/// List all accounts owned by one customer.
#[utoipa::path(
    get,
    path = "/view-accounts/{customer_id}",
    params(("customer_id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Accounts of the customer", body = [Account]),
        (status = 403, description = "Caller is not an employee")
    ),
    tag = "Accounts"
)]
pub async fn view_accounts(
    State(state): State<Arc<AppState>>,
    CallerRole(caller): CallerRole,
    Path(customer_id): Path<i64>,
) -> ApiResult<Vec<Account>> {
    require_role(caller, Role::Teller)?;

    let accounts = AccountRepository::list_for_customer(state.db.pool(), customer_id)
        .await
        .map_err(LedgerError::from)?;
    ok(accounts)
}

/// Open a new account for an existing customer. Manager rank required.
#[utoipa::path(
    post,
    path = "/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 200, description = "Account created", body = CreateAccountResponse),
        (status = 400, description = "Negative initial deposit"),
        (status = 403, description = "Caller ranks below manager"),
        (status = 404, description = "Customer not found")
    ),
    tag = "Accounts"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    CallerRole(caller): CallerRole,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<CreateAccountResponse> {
    require_role(caller, Role::Manager)?;

    if req.initial_deposit < Decimal::ZERO {
        return Err(LedgerError::InvalidAmount.into());
    }

    CustomerRepository::get_by_id(state.db.pool(), req.customer_id)
        .await
        .map_err(LedgerError::from)?
        .ok_or_else(|| ApiError::not_found(format!("customer not found: {}", req.customer_id)))?;

    let account_id = AccountRepository::create(state.db.pool(), req.customer_id, req.initial_deposit)
        .await
        .map_err(LedgerError::from)?;

    tracing::info!(account_id, customer_id = req.customer_id, "Account created");
    ok(CreateAccountResponse {
        account_id,
        customer_id: req.customer_id,
    })
}

/// Read one account's current balance. Teller rank required.
#[utoipa::path(
    get,
    path = "/accounts/{account_id}/balance",
    params(("account_id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Current balance", body = BalanceResponse),
        (status = 403, description = "Caller is not an employee"),
        (status = 404, description = "Account not found")
    ),
    tag = "Accounts"
)]
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    CallerRole(caller): CallerRole,
    Path(account_id): Path<i64>,
) -> ApiResult<BalanceResponse> {
    require_role(caller, Role::Teller)?;

    let account = AccountRepository::get_by_id(state.db.pool(), account_id)
        .await
        .map_err(LedgerError::from)?
        .ok_or(LedgerError::AccountNotFound(account_id))?;

    ok(BalanceResponse {
        customer_id: account.customer_id,
        account_id: account.id,
        balance: account.balance,
    })
}
