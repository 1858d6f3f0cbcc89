// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize`, `Deserialize`, and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.
//!
//! ## Wire Naming
//!
//! All fields are serialized in camelCase (`firstName`, `createdAt`, ...),
//! matching the claim names embedded in issued tokens (`accountNumber`).
//!
//! ## Model Categories
//!
//! - **Accounts**: the stored account record and its create request/response
//! - **Transfers**: transfer requests (echoed back; execution is out of scope)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Account Models
// =============================================================================

/// A customer account.
///
/// The `id` is the store identifier used in resource paths (`/account/{id}`).
/// The `number` is the authorization subject: it is assigned once at creation,
/// never changes, and is the sole fact an issued token certifies.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Store identifier, assigned sequentially on creation.
    pub id: i64,
    /// Account holder's first name.
    pub first_name: String,
    /// Account holder's last name.
    pub last_name: String,
    /// Unique account number certified by issued tokens.
    pub number: i64,
    /// Current balance in minor units.
    pub balance: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Account holder's first name.
    pub first_name: String,
    /// Account holder's last name.
    pub last_name: String,
}

/// Response to a successful account creation.
///
/// Carries the bearer token for the new account; the token is returned
/// exactly once and is not recoverable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {
    /// The newly created account.
    pub account: Account,
    /// Bearer token certifying the account's number.
    pub token: String,
}

// =============================================================================
// Transfer Models
// =============================================================================

/// Request to transfer funds to another account.
///
/// Transfer execution is handled by a separate settlement service; this API
/// only validates the shape of the request and echoes it back.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Destination account number.
    pub to_account: i64,
    /// Amount to transfer in minor units.
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_serializes_in_camel_case() {
        let account = Account {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            number: 424_242,
            balance: 0,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["lastName"], "Lovelace");
        assert_eq!(value["number"], 424_242);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("first_name").is_none());
    }

    #[test]
    fn transfer_request_round_trips() {
        let request: TransferRequest =
            serde_json::from_str(r#"{"toAccount":7,"amount":100}"#).unwrap();
        assert_eq!(request.to_account, 7);
        assert_eq!(request.amount, 100);

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"toAccount":7,"amount":100}"#);
    }
}
