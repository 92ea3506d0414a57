// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client for the customer banking backend. Every authenticated request
//! carries `Authorization: Bearer <token>`; a non-success status means the
//! backend rejected the token (no retries, 401 is not special-cased), while
//! a transport failure is reported separately so callers can tell a dropped
//! connection from a dead session.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::error::{PassbookError, Result};
use crate::models::CustomerData;
use crate::utils::http_client;

/// Seam between the view layer and the network. The dashboard and report
/// flows only ever talk to this trait.
pub trait CustomerApi {
    fn customer_details(&self, token: &str) -> Result<CustomerData>;

    fn transactions_report_pdf(
        &self,
        token: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<u8>>;
}

pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(ApiClient {
            base_url: base_url.into(),
            http: http_client()?,
        })
    }

    /// Exchange credentials for a bearer token. A rejected login surfaces
    /// the backend's `detail` message verbatim.
    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        let resp = self
            .http
            .post(format!("{}/customer_data/login", self.base_url))
            .json(&json!({ "username": username, "password": password }))
            .send()?;
        if resp.status().is_success() {
            let body: TokenResponse = resp.json()?;
            Ok(body.access_token)
        } else {
            let detail = resp
                .json::<ErrorDetail>()
                .map(|e| e.detail)
                .unwrap_or_else(|_| "Login failed".to_string());
            Err(PassbookError::LoginRejected(detail))
        }
    }
}

impl CustomerApi for ApiClient {
    fn customer_details(&self, token: &str) -> Result<CustomerData> {
        let resp = self
            .http
            .get(format!("{}/customer_data/customers_details", self.base_url))
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;
        if !resp.status().is_success() {
            return Err(PassbookError::Unauthenticated {
                status: resp.status().as_u16(),
            });
        }
        let mut data: CustomerData = resp.json()?;
        data.tag_directions();
        Ok(data)
    }

    fn transactions_report_pdf(
        &self,
        token: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<u8>> {
        let resp = self
            .http
            .get(format!(
                "{}/api/pdf-reports/customers/my_transactions_report/pdf",
                self.base_url
            ))
            .query(&[
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
            ])
            .bearer_auth(token)
            .send()?;
        if !resp.status().is_success() {
            return Err(PassbookError::Unauthenticated {
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.bytes()?.to_vec())
    }
}
