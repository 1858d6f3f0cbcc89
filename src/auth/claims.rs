// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token claims.

use serde::{Deserialize, Serialize};

/// Claims embedded in an issued token.
///
/// The claim set is a fixed record, not an open key/value bag: decoding
/// rejects tokens where either field is absent or of the wrong kind, so a
/// validated token always carries both facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// The account number this token certifies ownership of.
    ///
    /// This is the authorization subject. It is the account's `number`,
    /// not its store identifier.
    pub account_number: i64,

    /// Expiration timestamp (Unix seconds).
    pub expires_at: i64,
}
