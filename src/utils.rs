// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::error::PassbookError;

/// Display currency of the bank. Amounts on the wire carry no currency code.
pub const CURRENCY: &str = "LKR";

const UA: &str = concat!(
    "passbook/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/passbook)"
);

pub fn http_client() -> Result<reqwest::blocking::Client, reqwest::Error> {
    reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()
}

pub fn parse_date(s: &str) -> crate::error::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| PassbookError::InvalidDate {
        input: s.to_string(),
    })
}

/// Format an amount as `LKR 1,234.50`, two decimals, thousands grouping,
/// leading sign for negatives.
pub fn fmt_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let magnitude = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = magnitude.split_once('.').unwrap_or((magnitude.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{} {}.{}", sign, CURRENCY, int_grouped, frac_part)
}

pub fn fmt_day(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

/// Render a server timestamp or date for display, e.g. `Jan 6, 2024`.
/// Timestamps arrive in a handful of shapes; fall back to the raw string
/// rather than failing a render over one field.
pub fn fmt_date(s: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return fmt_day(d);
    }
    s.to_string()
}

/// Percentage of a fixed deposit's term elapsed as of `today`, floored and
/// clamped to 0..=100. A term with `maturity <= opened` counts as fully
/// elapsed.
pub fn maturity_progress(opened: NaiveDate, maturity: NaiveDate, today: NaiveDate) -> u8 {
    let total = (maturity - opened).num_days();
    if total <= 0 {
        return 100;
    }
    let elapsed = (today - opened).num_days();
    ((elapsed.saturating_mul(100) / total).clamp(0, 100)) as u8
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

pub fn ensure_dir(path: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}
