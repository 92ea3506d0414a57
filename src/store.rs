// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PassbookError, Result};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Passbook", "passbook"));

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const TOKEN_KEY: &str = "access_token";

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        PassbookError::Io(std::io::Error::other(
            "could not determine platform-specific data dir",
        ))
    })?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir)?;
    Ok(data_dir.join("passbook.sqlite"))
}

/// Holds the session credential (and client settings) across process runs,
/// so a user does not re-authenticate on every invocation. The token is an
/// opaque string; validity is decided solely by the backend on next use.
///
/// Single writer in practice: `login` sets the token, `logout` or a rejected
/// fetch clears it. The store is passed explicitly to whatever needs it.
pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    pub fn open_default() -> Result<Self> {
        Self::open(&store_path()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            r#"
        CREATE TABLE IF NOT EXISTS session(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS settings(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
        )?;
        Ok(SessionStore { conn })
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO session(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![TOKEN_KEY, token],
        )?;
        Ok(())
    }

    pub fn token(&self) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM session WHERE key=?1",
                params![TOKEN_KEY],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    /// Drops the session wholesale, not just the token row.
    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM session", [])?;
        Ok(())
    }

    pub fn base_url(&self) -> Result<String> {
        let v: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key='base_url'",
                [],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
    }

    pub fn set_base_url(&self, url: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings(key, value) VALUES('base_url', ?1)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![url.trim_end_matches('/')],
        )?;
        Ok(())
    }
}
