// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::{
    error::ApiError,
    models::{Account, CreateAccountRequest, CreateAccountResponse},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/account",
    tag = "Accounts",
    responses((status = 200, body = [Account]))
)]
pub async fn list_accounts(State(state): State<AppState>) -> Json<Vec<Account>> {
    let store = state.store.read().await;
    Json(store.list_accounts())
}

#[utoipa::path(
    post,
    path = "/account",
    request_body = CreateAccountRequest,
    tag = "Accounts",
    responses((status = 201, body = CreateAccountResponse))
)]
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<CreateAccountResponse>), ApiError> {
    let account = state.store.write().await.create_account(request);

    // The token is handed out exactly once, here. It is never logged.
    let token = state.tokens.issue(&account).map_err(|err| {
        tracing::error!(%err, account_id = account.id, "token issuance failed");
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "token issuance failed")
    })?;

    tracing::info!(account_id = account.id, "account created");
    Ok((
        StatusCode::CREATED,
        Json(CreateAccountResponse { account, token }),
    ))
}

/// Fetch the gated account.
///
/// The access gate has already resolved `{id}` and proven the caller's
/// token certifies this account; the result rides in on request extensions.
#[utoipa::path(
    get,
    path = "/account/{id}",
    params(
        ("id" = i64, Path, description = "Identifier of the account to fetch")
    ),
    tag = "Accounts",
    responses(
        (status = 200, body = Account),
        (status = 403, description = "Permission denied")
    )
)]
pub async fn get_account(Extension(account): Extension<Account>) -> Json<Account> {
    Json(account)
}

#[utoipa::path(
    delete,
    path = "/account/{id}",
    params(
        ("id" = i64, Path, description = "Identifier of the account to delete")
    ),
    tag = "Accounts",
    responses(
        (status = 204),
        (status = 403, description = "Permission denied")
    )
)]
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
) -> Result<StatusCode, ApiError> {
    state.store.write().await.delete_account(account.id)?;
    tracing::info!(account_id = account.id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
