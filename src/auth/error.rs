// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication and authorization errors.

/// Why a protected request was denied.
///
/// These variants exist for internal logging and tests only. At the HTTP
/// boundary every one of them collapses to the same generic 403 response;
/// the variant is never serialized to a client.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Token is missing, not a JWT, or its claims do not decode.
    #[error("token is malformed")]
    MalformedToken,
    /// Token signature does not verify against the configured secret.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// Token is signed with an algorithm other than HS256.
    #[error("token signing algorithm is not HS256")]
    AlgorithmMismatch,
    /// Token's `expiresAt` claim is in the past.
    #[error("token has expired")]
    TokenExpired,
    /// The `{id}` path segment is not a valid account identifier.
    #[error("resource identifier is not a valid account id")]
    InvalidResourceId,
    /// No account exists for the requested identifier.
    #[error("account not found")]
    AccountNotFound,
    /// Token is valid but certifies a different account.
    #[error("token does not certify the requested account")]
    AccountNumberMismatch,
    /// Token signing failed.
    #[error("failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

/// Configuration error: the signing secret is unusable.
///
/// Raised once at startup when constructing the token service; it is fatal
/// and never surfaces on a per-request path.
#[derive(Debug, thiserror::Error)]
#[error("JWT signing secret must not be empty")]
pub struct EmptySecret;
