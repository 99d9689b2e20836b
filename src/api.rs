// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::models::{Entry, EntryId, EntryKind, NewEntry};

/// Remote store failures the ledger cares about. Everything that is not an
/// auth rejection collapses into `Unreachable`; the fallback behavior is the
/// same whether the network is down or the server answered 500.
#[derive(Debug)]
pub enum ApiError {
    Unauthenticated,
    Unreachable(String),
}

impl From<ApiError> for LedgerError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthenticated => LedgerError::Unauthenticated,
            ApiError::Unreachable(msg) => LedgerError::Unreachable(msg),
        }
    }
}

/// Wire form of an entry as the remote store returns it. Amounts are floats
/// on the wire; the ledger converts to `Decimal` at the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEntry {
    pub id: i64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl RemoteEntry {
    pub fn into_entry(self) -> Entry {
        Entry {
            id: EntryId::Server(self.id),
            amount: rust_decimal::Decimal::try_from(self.amount).unwrap_or_default(),
            kind: self.kind,
            category: self.category,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// Create payload. Never carries a client identifier; the remote store
/// assigns its own.
#[derive(Debug, Clone, Serialize)]
pub struct ExpensePayload {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub category: String,
    pub description: String,
}

impl ExpensePayload {
    pub fn from_new(new: &NewEntry) -> Self {
        ExpensePayload {
            amount: new.amount.to_f64().unwrap_or_default(),
            kind: new.kind,
            category: new.category.clone(),
            description: new.description.clone(),
        }
    }

    pub fn from_entry(entry: &Entry) -> Self {
        ExpensePayload {
            amount: entry.amount.to_f64().unwrap_or_default(),
            kind: entry.kind,
            category: entry.category.clone(),
            description: entry.description.clone(),
        }
    }
}

/// The seam between the ledger and the remote expense API. The production
/// implementation is `HttpStore`; tests script a fake.
pub trait RemoteStore {
    fn list(&self, token: &str) -> Result<Vec<RemoteEntry>, ApiError>;
    fn create(&self, token: &str, payload: &ExpensePayload) -> Result<RemoteEntry, ApiError>;
    fn delete(&self, token: &str, id: i64) -> Result<(), ApiError>;
}

const UA: &str = concat!(
    "investo/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/investo-app/investo)"
);

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access: String,
}

pub struct HttpStore {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl HttpStore {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Ok(HttpStore { base_url, http })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Trades a username/password for a bearer token. Credential issuance is
    /// owned by the backend; we only cache what it mints.
    pub fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let res = self
            .http
            .post(self.endpoint("accounts/login/"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        let res = check_status(res)?;
        let body: LoginResponse = res.json().map_err(|e| ApiError::Unreachable(e.to_string()))?;
        Ok(body.access)
    }
}

fn check_status(
    res: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthenticated);
    }
    let body = res.text().unwrap_or_else(|_| "unknown error".to_string());
    Err(ApiError::Unreachable(format!("{}: {}", status, body)))
}

impl RemoteStore for HttpStore {
    fn list(&self, token: &str) -> Result<Vec<RemoteEntry>, ApiError> {
        let res = self
            .http
            .get(self.endpoint("expenses/"))
            .bearer_auth(token)
            .send()
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        let res = check_status(res)?;
        res.json().map_err(|e| ApiError::Unreachable(e.to_string()))
    }

    fn create(&self, token: &str, payload: &ExpensePayload) -> Result<RemoteEntry, ApiError> {
        let res = self
            .http
            .post(self.endpoint("expenses/"))
            .bearer_auth(token)
            .json(payload)
            .send()
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        let res = check_status(res)?;
        res.json().map_err(|e| ApiError::Unreachable(e.to_string()))
    }

    fn delete(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let res = self
            .http
            .delete(self.endpoint(format!("expenses/{}/", id).as_str()))
            .bearer_auth(token)
            .send()
            .map_err(|e| ApiError::Unreachable(e.to_string()))?;
        check_status(res)?;
        Ok(())
    }
}
