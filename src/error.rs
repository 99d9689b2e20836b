// Copyright (c) 2025 Investo.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// Local validation failure. No side effect has happened.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The remote store rejected the credential. Not recoverable locally;
    /// the caller must re-authenticate.
    #[error("authentication rejected by the server, log in again")]
    Unauthenticated,
    /// Transport failure or a non-auth error status. Reads degrade to the
    /// pending buffer, writes buffer locally.
    #[error("server unreachable: {0}")]
    Unreachable(String),
    #[error("storage error: {0}")]
    Storage(String),
}
