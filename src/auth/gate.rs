// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Access gate middleware for account resources.
//!
//! Applied to `/account/{id}` routes. The gate authorizes a request in a
//! fixed sequence: extract the token, validate it, parse the resource
//! identifier, fetch the target account, and compare the token's certified
//! account number to the target's. Any failure denies the request; the
//! wrapped handler never runs.
//!
//! Every denial cause produces the same 403 response body. The distinction
//! between a bad token, an unknown identifier and a number mismatch is
//! logged server-side only, so probing responses cannot enumerate valid
//! account identifiers.

use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::error::AuthError;
use crate::error::ApiError;
use crate::models::Account;
use crate::state::AppState;

/// Request header carrying the bearer token on protected routes.
pub const X_JWT_TOKEN: &str = "x-jwt-token";

/// Outcome of authorizing a protected request.
///
/// The denial reason never reaches the client; it exists so the decision
/// stays debuggable in logs and assertable in tests.
#[derive(Debug)]
pub enum Authorization {
    /// Token certifies the target account; carries the fetched account.
    Granted(Account),
    /// Request is denied for the recorded reason.
    Denied(AuthError),
}

/// Middleware guarding account resources.
///
/// On success the fetched [`Account`] is inserted into request extensions
/// and the wrapped handler runs with the original request; its response is
/// surfaced unchanged. On denial the handler is never invoked.
pub async fn require_account_owner(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    mut request: Request,
    next: Next,
) -> Response {
    // A missing header degenerates to an empty token, which fails
    // validation like any other invalid token.
    let token = request
        .headers()
        .get(X_JWT_TOKEN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    match authorize(&state, &token, &raw_id).await {
        Authorization::Granted(account) => {
            request.extensions_mut().insert(account);
            next.run(request).await
        }
        Authorization::Denied(reason) => {
            tracing::warn!(%reason, path = %request.uri().path(), "account access denied");
            ApiError::permission_denied().into_response()
        }
    }
}

/// Run the authorization sequence for one request.
///
/// The identifier is parsed here rather than by the router's typed `Path`
/// extractor so a non-numeric `{id}` denies uniformly instead of surfacing
/// a framework-level 400.
pub async fn authorize(state: &AppState, token: &str, raw_id: &str) -> Authorization {
    let claims = match state.tokens.validate(token) {
        Ok(claims) => claims,
        Err(err) => return Authorization::Denied(err),
    };

    let id: i64 = match raw_id.parse() {
        Ok(id) => id,
        Err(_) => return Authorization::Denied(AuthError::InvalidResourceId),
    };

    let account = match state.store.read().await.account_by_id(id) {
        Ok(account) => account,
        Err(_) => return Authorization::Denied(AuthError::AccountNotFound),
    };

    if claims.account_number != account.number {
        return Authorization::Denied(AuthError::AccountNumberMismatch);
    }

    Authorization::Granted(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenService;
    use crate::models::CreateAccountRequest;
    use crate::store::InMemoryStore;

    async fn state_with_account() -> (AppState, Account, String) {
        let tokens = TokenService::new("test-secret").unwrap();
        let mut store = InMemoryStore::new();
        let account = store.create_account(CreateAccountRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        });
        let state = AppState::new(store, tokens);
        let token = state.tokens.issue(&account).unwrap();
        (state, account, token)
    }

    #[tokio::test]
    async fn matching_token_is_granted() {
        let (state, account, token) = state_with_account().await;

        let decision = authorize(&state, &token, &account.id.to_string()).await;
        match decision {
            Authorization::Granted(granted) => assert_eq!(granted, account),
            Authorization::Denied(reason) => panic!("unexpected denial: {reason}"),
        }
    }

    #[tokio::test]
    async fn token_for_other_account_is_denied() {
        let (state, account, _token) = state_with_account().await;

        let other = state.store.write().await.create_account(CreateAccountRequest {
            first_name: "Alan".into(),
            last_name: "Turing".into(),
        });
        let other_token = state.tokens.issue(&other).unwrap();

        let decision = authorize(&state, &other_token, &account.id.to_string()).await;
        assert!(matches!(
            decision,
            Authorization::Denied(AuthError::AccountNumberMismatch)
        ));
    }

    #[tokio::test]
    async fn missing_token_is_denied_as_malformed() {
        let (state, account, _token) = state_with_account().await;

        let decision = authorize(&state, "", &account.id.to_string()).await;
        assert!(matches!(
            decision,
            Authorization::Denied(AuthError::MalformedToken)
        ));
    }

    #[tokio::test]
    async fn non_numeric_identifier_is_denied() {
        let (state, _account, token) = state_with_account().await;

        let decision = authorize(&state, &token, "abc").await;
        assert!(matches!(
            decision,
            Authorization::Denied(AuthError::InvalidResourceId)
        ));
    }

    #[tokio::test]
    async fn unknown_identifier_is_denied() {
        let (state, _account, token) = state_with_account().await;

        let decision = authorize(&state, &token, "9999").await;
        assert!(matches!(
            decision,
            Authorization::Denied(AuthError::AccountNotFound)
        ));
    }

    #[tokio::test]
    async fn token_is_validated_before_identifier_parsing() {
        let (state, _account, _token) = state_with_account().await;

        // Both the token and the identifier are invalid; the token check
        // runs first, so that is the recorded reason.
        let decision = authorize(&state, "garbage", "abc").await;
        assert!(matches!(
            decision,
            Authorization::Denied(AuthError::MalformedToken)
        ));
    }
}
