// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::require_account_owner,
    models::{Account, CreateAccountRequest, CreateAccountResponse, TransferRequest},
    state::AppState,
};

pub mod accounts;
pub mod health;
pub mod transfer;

pub fn router(state: AppState) -> Router {
    // Only the by-id routes sit behind the access gate; account creation
    // and listing are open, as is the transfer intake.
    let protected = Router::new()
        .route(
            "/account/{id}",
            get(accounts::get_account).delete(accounts::delete_account),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_account_owner,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route(
            "/account",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route("/transfer", post(transfer::create_transfer))
        .merge(protected)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        accounts::list_accounts,
        accounts::create_account,
        accounts::get_account,
        accounts::delete_account,
        transfer::create_transfer
    ),
    components(
        schemas(
            Account,
            CreateAccountRequest,
            CreateAccountResponse,
            TransferRequest,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Accounts", description = "Account management"),
        (name = "Transfers", description = "Transfer intake")
    )
)]
struct ApiDoc;
