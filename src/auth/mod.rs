// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! This module provides JWT-bound account access control for the API.
//!
//! ## Auth Flow
//!
//! 1. `POST /account` creates an account and issues an HS256 token whose
//!    claims certify that account's number
//! 2. Clients send the token on protected requests via `x-jwt-token: <JWT>`
//! 3. The access gate on `/account/{id}`:
//!    - Validates the token (algorithm, signature, claim shape, expiry)
//!    - Resolves `{id}` to the target account
//!    - Permits the handler only when the token's `accountNumber` claim
//!      matches the target account's number
//!
//! ## Security
//!
//! - Only HS256 tokens are accepted; any other algorithm is rejected
//! - The signing secret is injected at startup, never read ambiently
//! - Every denial cause collapses to one uniform 403 response, so probing
//!   responses reveals nothing about valid identifiers or token state
//! - Clock skew tolerance is 60 seconds

pub mod claims;
pub mod error;
pub mod gate;
pub mod token;

pub use claims::TokenClaims;
pub use error::{AuthError, EmptySecret};
pub use gate::{require_account_owner, Authorization};
pub use token::TokenService;
