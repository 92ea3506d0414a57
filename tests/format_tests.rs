// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use passbook::utils::{fmt_currency, fmt_date, fmt_day, maturity_progress, parse_date};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn currency_two_decimals_and_grouping() {
    let s = fmt_currency(Decimal::new(12345, 1)); // 1234.5
    assert!(s.contains("1,234.50"), "got {}", s);
    assert!(s.starts_with("LKR "), "got {}", s);

    assert_eq!(fmt_currency(Decimal::ZERO), "LKR 0.00");
    assert_eq!(fmt_currency(Decimal::new(999, 0)), "LKR 999.00");
    assert_eq!(fmt_currency(Decimal::new(1_000_000, 0)), "LKR 1,000,000.00");
}

#[test]
fn currency_negative_has_leading_sign() {
    assert_eq!(fmt_currency(Decimal::new(-12345, 1)), "-LKR 1,234.50");
}

#[test]
fn currency_rounds_half_to_even() {
    // round_dp is banker's rounding
    assert_eq!(fmt_currency(Decimal::new(10125, 3)), "LKR 10.12"); // 10.125
    assert_eq!(fmt_currency(Decimal::new(10135, 3)), "LKR 10.14"); // 10.135
}

#[test]
fn date_display_handles_common_shapes() {
    assert_eq!(fmt_date("2024-01-06"), "Jan 6, 2024");
    assert_eq!(fmt_date("2024-01-06T09:30:00"), "Jan 6, 2024");
    assert_eq!(fmt_date("2024-01-06T09:30:00.123456"), "Jan 6, 2024");
    assert_eq!(fmt_date("2024-01-06T09:30:00Z"), "Jan 6, 2024");
    // unparseable input falls through untouched
    assert_eq!(fmt_date("06/01/2024"), "06/01/2024");

    assert_eq!(fmt_day(d(2024, 12, 25)), "Dec 25, 2024");
}

#[test]
fn parse_date_rejects_garbage() {
    assert!(parse_date("2024-01-06").is_ok());
    assert!(parse_date("2024-13-40").is_err());
    assert!(parse_date("soon").is_err());
}

#[test]
fn maturity_progress_midway() {
    let p = maturity_progress(d(2024, 1, 1), d(2024, 1, 11), d(2024, 1, 6));
    assert_eq!(p, 50);
}

#[test]
fn maturity_progress_floors() {
    // 2 of 3 days elapsed = 66.66.. -> 66
    let p = maturity_progress(d(2024, 1, 1), d(2024, 1, 4), d(2024, 1, 3));
    assert_eq!(p, 66);
}

#[test]
fn maturity_progress_clamps_both_ends() {
    assert_eq!(
        maturity_progress(d(2024, 1, 10), d(2024, 2, 10), d(2024, 1, 1)),
        0
    );
    assert_eq!(
        maturity_progress(d(2024, 1, 1), d(2024, 2, 1), d(2025, 1, 1)),
        100
    );
}

#[test]
fn maturity_progress_degenerate_term_is_complete() {
    // maturity == opened must not divide by zero
    assert_eq!(
        maturity_progress(d(2024, 1, 1), d(2024, 1, 1), d(2024, 1, 1)),
        100
    );
    // maturity before opened counts as fully elapsed too
    assert_eq!(
        maturity_progress(d(2024, 3, 1), d(2024, 1, 1), d(2024, 2, 1)),
        100
    );
}
