// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// Kind of a ledger entry. Lowercase on the wire, matching the remote
/// store's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
    Saving,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
            EntryKind::Saving => "saving",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            "saving" => Ok(EntryKind::Saving),
            other => Err(LedgerError::InvalidInput(format!(
                "unknown kind '{}', expected income|expense|saving",
                other
            ))),
        }
    }

    /// Category validity is a function of kind; the remote store's schema
    /// supplies the vocabulary.
    pub fn allowed_categories(&self) -> &'static [&'static str] {
        match self {
            EntryKind::Income => &["salary", "other"],
            EntryKind::Expense => &["food", "clothing", "emi", "misc", "other"],
            EntryKind::Saving => &["other"],
        }
    }

    pub fn default_category(&self) -> &'static str {
        match self {
            EntryKind::Income => "salary",
            EntryKind::Expense => "misc",
            EntryKind::Saving => "other",
        }
    }
}

/// Entry identity. Server and local identifier spaces are disjoint; an entry
/// moves Local -> Server exactly once, when a sync lands it in the remote
/// store, and never the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryId {
    Server(i64),
    Local(i64),
}

impl EntryId {
    /// Fresh client-side identifier for a not-yet-synced entry.
    pub fn fresh_local() -> Self {
        EntryId::Local(Utc::now().timestamp_millis())
    }

    pub fn is_local(&self) -> bool {
        matches!(self, EntryId::Local(_))
    }

    /// Parses the CLI/display form: plain integers are server ids,
    /// `local-<n>` is a buffered entry.
    pub fn parse(s: &str) -> Result<Self> {
        if let Some(rest) = s.strip_prefix("local-") {
            let n: i64 = rest
                .parse()
                .map_err(|_| LedgerError::InvalidInput(format!("invalid local id '{}'", s)))?;
            return Ok(EntryId::Local(n));
        }
        let n: i64 = s
            .parse()
            .map_err(|_| LedgerError::InvalidInput(format!("invalid entry id '{}'", s)))?;
        Ok(EntryId::Server(n))
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryId::Server(n) => write!(f, "{}", n),
            EntryId::Local(n) => write!(f, "local-{}", n),
        }
    }
}

/// One ledger record. Immutable once created; there is no edit-in-place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub amount: Decimal,
    pub kind: EntryKind,
    pub category: String,
    pub description: String,
    pub created_at: Option<String>,
}

/// Validated input for `add`. Construction is the only validation gate:
/// a `NewEntry` that exists is acceptable to the ledger.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub amount: Decimal,
    pub kind: EntryKind,
    pub category: String,
    pub description: String,
}

impl NewEntry {
    pub fn parse(
        amount: &str,
        kind: EntryKind,
        category: Option<&str>,
        description: &str,
    ) -> Result<Self> {
        let amount: Decimal = amount
            .trim()
            .parse()
            .map_err(|_| LedgerError::InvalidInput(format!("invalid amount '{}'", amount)))?;
        if amount < Decimal::ZERO {
            return Err(LedgerError::InvalidInput(format!(
                "amount must be non-negative, got {}",
                amount
            )));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(LedgerError::InvalidInput(
                "description must not be empty".into(),
            ));
        }
        // Unknown categories fall back to the kind default, same rule as the
        // kind-change reset on the input form.
        let category = match category {
            Some(c) if kind.allowed_categories().contains(&c) => c.to_string(),
            _ => kind.default_category().to_string(),
        };
        Ok(NewEntry {
            amount,
            kind,
            category,
            description: description.to_string(),
        })
    }

    pub(crate) fn into_local_entry(self) -> Entry {
        Entry {
            id: EntryId::fresh_local(),
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            description: self.description,
            created_at: Some(Utc::now().to_rfc3339()),
        }
    }
}
