// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use passbook::store::{DEFAULT_BASE_URL, SessionStore};
use tempfile::tempdir;

#[test]
fn token_roundtrip_and_clear() {
    let store = SessionStore::open_in_memory().unwrap();
    assert_eq!(store.token().unwrap(), None);

    store.set_token("tok-abc").unwrap();
    assert_eq!(store.token().unwrap().as_deref(), Some("tok-abc"));

    store.set_token("tok-def").unwrap();
    assert_eq!(store.token().unwrap().as_deref(), Some("tok-def"));

    store.clear().unwrap();
    assert_eq!(store.token().unwrap(), None);
}

#[test]
fn token_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("passbook.sqlite");

    {
        let store = SessionStore::open(&path).unwrap();
        store.set_token("tok-persisted").unwrap();
    }

    let store = SessionStore::open(&path).unwrap();
    assert_eq!(store.token().unwrap().as_deref(), Some("tok-persisted"));
}

#[test]
fn base_url_defaults_and_overrides() {
    let store = SessionStore::open_in_memory().unwrap();
    assert_eq!(store.base_url().unwrap(), DEFAULT_BASE_URL);

    store.set_base_url("https://bank.example.com/").unwrap();
    assert_eq!(store.base_url().unwrap(), "https://bank.example.com");
}

#[test]
fn clearing_the_session_keeps_settings() {
    let store = SessionStore::open_in_memory().unwrap();
    store.set_base_url("https://bank.example.com").unwrap();
    store.set_token("tok-abc").unwrap();

    store.clear().unwrap();
    assert_eq!(store.token().unwrap(), None);
    assert_eq!(store.base_url().unwrap(), "https://bank.example.com");
}
