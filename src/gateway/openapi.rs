//! OpenAPI document for the gateway, served through Swagger UI.

use utoipa::OpenApi;

use crate::account::{Account, Customer, TransactionRecord};
use crate::gateway::types::{
    BalanceResponse, CreateAccountRequest, CreateAccountResponse, DepositWithdrawRequest,
    MutationResponse, TransferRequest, TransferResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bank Ledger API",
        description = "Role-gated ledger service: accounts, deposits, withdrawals and concurrent transfers."
    ),
    paths(
        crate::gateway::handlers::accounts::health,
        crate::gateway::handlers::accounts::view_customers,
        crate::gateway::handlers::accounts::view_accounts,
        crate::gateway::handlers::accounts::create_account,
        crate::gateway::handlers::accounts::get_balance,
        crate::gateway::handlers::transfer::transfer_money,
        crate::gateway::handlers::transfer::deposit_money,
        crate::gateway::handlers::transfer::withdraw_money,
        crate::gateway::handlers::transfer::get_transactions,
    ),
    components(schemas(
        Customer,
        Account,
        TransactionRecord,
        TransferRequest,
        TransferResponse,
        DepositWithdrawRequest,
        MutationResponse,
        CreateAccountRequest,
        CreateAccountResponse,
        BalanceResponse,
    )),
    tags(
        (name = "General", description = "Service health"),
        (name = "Accounts", description = "Customer and account management"),
        (name = "Ledger", description = "Balance mutation and transaction history")
    )
)]
pub struct ApiDoc;
