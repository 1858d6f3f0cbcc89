// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;

use crate::models::TransferRequest;

/// Accept a transfer request.
///
/// Execution is delegated to the settlement service; this endpoint validates
/// the request shape and echoes it back to the caller.
#[utoipa::path(
    post,
    path = "/transfer",
    request_body = TransferRequest,
    tag = "Transfers",
    responses((status = 200, body = TransferRequest))
)]
pub async fn create_transfer(Json(request): Json<TransferRequest>) -> Json<TransferRequest> {
    Json(request)
}
