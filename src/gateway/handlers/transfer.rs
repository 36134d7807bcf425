//! Ledger mutation and history handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::account::TransactionRecord;
use crate::auth::{Role, require_role};
use crate::gateway::CallerRole;
use crate::gateway::state::AppState;
use crate::gateway::types::{
    ApiResult, DepositWithdrawRequest, MutationResponse, TransferRequest, TransferResponse, ok,
};

/// Move money between two accounts. Manager rank is enforced by the engine
/// itself, before any store access.
#[utoipa::path(
    post,
    path = "/transfer",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer committed", body = TransferResponse),
        (status = 400, description = "Invalid amount, same account or insufficient funds"),
        (status = 403, description = "Caller ranks below manager"),
        (status = 404, description = "Account not found"),
        (status = 503, description = "Store conflict persisted, retry later")
    ),
    tag = "Ledger"
)]
pub async fn transfer_money(
    State(state): State<Arc<AppState>>,
    CallerRole(caller): CallerRole,
    Json(req): Json<TransferRequest>,
) -> ApiResult<TransferResponse> {
    let receipt = state
        .engine
        .transfer(req.from_account, req.to_account, req.amount, caller)
        .await?;

    ok(TransferResponse {
        transaction_id: receipt.transaction_id,
        timestamp: receipt.timestamp,
    })
}

/// Credit an account. Teller rank required.
#[utoipa::path(
    post,
    path = "/deposit",
    request_body = DepositWithdrawRequest,
    responses(
        (status = 200, description = "Amount credited", body = MutationResponse),
        (status = 400, description = "Non-positive amount"),
        (status = 403, description = "Caller is not an employee"),
        (status = 404, description = "Account not found")
    ),
    tag = "Ledger"
)]
pub async fn deposit_money(
    State(state): State<Arc<AppState>>,
    CallerRole(caller): CallerRole,
    Json(req): Json<DepositWithdrawRequest>,
) -> ApiResult<MutationResponse> {
    require_role(caller, Role::Teller)?;

    let new_balance = state.engine.deposit(req.account_id, req.amount).await?;
    ok(MutationResponse {
        account_id: req.account_id,
        new_balance,
    })
}

/// Debit an account. Teller rank required.
#[utoipa::path(
    post,
    path = "/withdraw",
    request_body = DepositWithdrawRequest,
    responses(
        (status = 200, description = "Amount debited", body = MutationResponse),
        (status = 400, description = "Non-positive amount or insufficient funds"),
        (status = 403, description = "Caller is not an employee"),
        (status = 404, description = "Account not found")
    ),
    tag = "Ledger"
)]
pub async fn withdraw_money(
    State(state): State<Arc<AppState>>,
    CallerRole(caller): CallerRole,
    Json(req): Json<DepositWithdrawRequest>,
) -> ApiResult<MutationResponse> {
    require_role(caller, Role::Teller)?;

    let new_balance = state.engine.withdraw(req.account_id, req.amount).await?;
    ok(MutationResponse {
        account_id: req.account_id,
        new_balance,
    })
}

/// Transaction history for one account, most recent first. Manager rank
/// required.
#[utoipa::path(
    get,
    path = "/accounts/{account_id}/transactions",
    params(("account_id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Ledger entries, timestamp descending", body = [TransactionRecord]),
        (status = 403, description = "Caller ranks below manager"),
        (status = 404, description = "Account not found")
    ),
    tag = "Ledger"
)]
pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    CallerRole(caller): CallerRole,
    Path(account_id): Path<i64>,
) -> ApiResult<Vec<TransactionRecord>> {
    require_role(caller, Role::Manager)?;

    let transactions = state.history.get_history(account_id).await?;
    ok(transactions)
}
