// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory account store.
//!
//! The store is the system of record for accounts. It assigns the two
//! identities every account carries:
//!
//! - `id`: the sequential store identifier used in resource paths
//! - `number`: the unique account number certified by issued tokens
//!
//! Both are immutable once assigned. Durable persistence lives behind the
//! same interface in the hosted deployment; this process-local store covers
//! the service's needs and keeps tests hermetic.

use std::collections::HashMap;

use chrono::Utc;
use rand::Rng;

use crate::error::ApiError;
use crate::models::{Account, CreateAccountRequest};

/// Account numbers are six-digit values, well away from store identifiers.
const ACCOUNT_NUMBER_RANGE: std::ops::Range<i64> = 100_000..1_000_000;

#[derive(Default)]
pub struct InMemoryStore {
    accounts: HashMap<i64, Account>,
    next_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account, assigning its identifier and account number.
    pub fn create_account(&mut self, request: CreateAccountRequest) -> Account {
        self.next_id += 1;
        let account = Account {
            id: self.next_id,
            first_name: request.first_name,
            last_name: request.last_name,
            number: self.unique_account_number(),
            balance: 0,
            created_at: Utc::now(),
        };
        self.accounts.insert(account.id, account.clone());
        account
    }

    pub fn list_accounts(&self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.values().cloned().collect();
        accounts.sort_by_key(|account| account.id);
        accounts
    }

    pub fn account_by_id(&self, id: i64) -> Result<Account, ApiError> {
        self.accounts
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Account not found"))
    }

    pub fn delete_account(&mut self, id: i64) -> Result<(), ApiError> {
        if self.accounts.remove(&id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found("Account not found"))
        }
    }

    /// Draw a random account number not already in use.
    fn unique_account_number(&self) -> i64 {
        let mut rng = rand::rng();
        loop {
            let number = rng.random_range(ACCOUNT_NUMBER_RANGE);
            if !self.accounts.values().any(|account| account.number == number) {
                return number;
            }
        }
    }
}
