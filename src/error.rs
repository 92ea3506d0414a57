// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Single error type for the client. `MissingCredential` and
//! `Unauthenticated` end the dashboard session; only the latter clears the
//! stored token. `Validation` and `Download` belong to the report flow and
//! never touch session state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassbookError {
    #[error("not signed in. Run `passbook login` first")]
    MissingCredential,

    #[error("the server rejected the session (HTTP {status}). Run `passbook login` to sign in again")]
    Unauthenticated { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("{0}")]
    LoginRejected(String),

    #[error("{0}")]
    Validation(String),

    #[error("failed to download the report: {0}")]
    Download(String),

    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("session store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for PassbookError {
    fn from(e: reqwest::Error) -> Self {
        PassbookError::Network(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PassbookError>;
