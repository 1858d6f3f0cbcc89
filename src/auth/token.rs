// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token issuance and validation.
//!
//! One symmetric secret signs and verifies every token. The service is
//! constructed once at startup and is a pure function of its inputs
//! afterwards; it performs no network or storage access.

use chrono::Utc;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::claims::TokenClaims;
use super::error::{AuthError, EmptySecret};
use crate::models::Account;

/// Issued tokens are valid for 24 hours.
const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: i64 = 60;

/// The only accepted signing algorithm.
///
/// Tokens declaring any other algorithm are rejected before signature
/// verification, closing the downgrade path where an attacker swaps the
/// algorithm tag on an otherwise plausible token.
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Issues and validates account-bound bearer tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the configured secret.
    ///
    /// Rejects an empty secret: a guessable default here would let anyone
    /// mint valid tokens, so the caller must treat this error as fatal.
    pub fn new(secret: &str) -> Result<Self, EmptySecret> {
        if secret.is_empty() {
            return Err(EmptySecret);
        }

        // The claim set uses its own `expiresAt` field rather than the
        // registered `exp` claim, so the library-level expiry checks are
        // disabled and expiry is enforced in `validate`.
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Issue a token certifying `account`'s number.
    pub fn issue(&self, account: &Account) -> Result<String, AuthError> {
        let claims = TokenClaims {
            account_number: account.number,
            expires_at: Utc::now().timestamp() + TOKEN_TTL_SECS,
        };

        encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(AuthError::Signing)
    }

    /// Validate a presented token and return its claims.
    ///
    /// Checks, in order: the declared algorithm is HS256, the signature
    /// verifies against the configured secret, the claims decode to the
    /// expected record, and the token has not expired.
    pub fn validate(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::MalformedToken)?;
        if header.alg != SIGNING_ALGORITHM {
            return Err(AuthError::AlgorithmMismatch);
        }

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => AuthError::AlgorithmMismatch,
                _ => AuthError::MalformedToken,
            })?;

        let claims = token_data.claims;
        if claims.expires_at + CLOCK_SKEW_LEEWAY < Utc::now().timestamp() {
            return Err(AuthError::TokenExpired);
        }

        Ok(claims)
    }
}
