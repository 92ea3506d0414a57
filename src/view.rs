// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Dashboard view state and the credential gate. Data is fetched exactly
//! once per mount; every tab renders from the same held `CustomerData`, and
//! switching tabs never goes back to the network.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::api::CustomerApi;
use crate::error::{PassbookError, Result};
use crate::models::{CustomerData, Summary};
use crate::store::SessionStore;
use crate::utils::{fmt_currency, fmt_date, fmt_day, maturity_progress, parse_date, pretty_table};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Accounts,
    Transactions,
    FixedDeposits,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Overview,
        Tab::Accounts,
        Tab::Transactions,
        Tab::FixedDeposits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Accounts => "accounts",
            Tab::Transactions => "transactions",
            Tab::FixedDeposits => "fixed-deposits",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = PassbookError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "overview" => Ok(Tab::Overview),
            "accounts" => Ok(Tab::Accounts),
            "transactions" => Ok(Tab::Transactions),
            "fixed-deposits" => Ok(Tab::FixedDeposits),
            _ => Err(PassbookError::Validation(format!(
                "unknown tab '{}', expected overview|accounts|transactions|fixed-deposits",
                s
            ))),
        }
    }
}

#[derive(Debug, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready(CustomerData),
    Unauthenticated,
}

/// The one credential-gated fetch of the customer aggregate. No stored token
/// means no network call at all. A rejected token clears the session; a
/// transport failure leaves it alone so a flaky connection does not log the
/// user out.
pub fn fetch_gated<A: CustomerApi>(store: &SessionStore, api: &A) -> Result<CustomerData> {
    let token = store.token()?.ok_or(PassbookError::MissingCredential)?;
    match api.customer_details(&token) {
        Ok(data) => Ok(data),
        Err(e @ PassbookError::Unauthenticated { .. }) => {
            store.clear()?;
            Err(e)
        }
        Err(e) => Err(e),
    }
}

#[derive(Default)]
pub struct Dashboard {
    state: DashboardState,
    active_tab: Tab,
}

impl Dashboard {
    pub fn new() -> Self {
        Dashboard::default()
    }

    /// Mount the dashboard: query the session store, fetch the customer
    /// aggregate, and settle into `Ready` (default tab: overview) or
    /// `Unauthenticated`. On a transport failure the state stays `Loading`
    /// and the session is kept, so the caller can simply retry later.
    pub fn mount<A: CustomerApi>(&mut self, store: &SessionStore, api: &A) -> Result<()> {
        match fetch_gated(store, api) {
            Ok(data) => {
                self.state = DashboardState::Ready(data);
                self.active_tab = Tab::Overview;
                Ok(())
            }
            Err(e @ (PassbookError::MissingCredential | PassbookError::Unauthenticated { .. })) => {
                self.state = DashboardState::Unauthenticated;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Pure state update; renders keep reading the already-loaded data.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn data(&self) -> Option<&CustomerData> {
        match &self.state {
            DashboardState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// User-triggered: clears the session unconditionally.
    pub fn logout(&mut self, store: &SessionStore) -> Result<()> {
        store.clear()?;
        self.state = DashboardState::Unauthenticated;
        Ok(())
    }
}

pub fn render_summary(summary: &Summary) -> String {
    pretty_table(
        &[
            "Total Balance",
            "Active Accounts",
            "Fixed Deposits",
            "Transactions",
        ],
        vec![vec![
            fmt_currency(summary.total_balance),
            summary.active_accounts.to_string(),
            summary.active_fixed_deposits.to_string(),
            summary.total_transactions.to_string(),
        ]],
    )
    .to_string()
}

pub fn render_tab(data: &CustomerData, tab: Tab, today: NaiveDate) -> String {
    match tab {
        Tab::Overview => render_overview(data),
        Tab::Accounts => render_accounts(data),
        Tab::Transactions => render_transactions(data),
        Tab::FixedDeposits => render_fixed_deposits(data, today),
    }
}

fn render_overview(data: &CustomerData) -> String {
    let p = &data.customer_profile;
    let profile = pretty_table(
        &["Field", "Value"],
        vec![
            vec!["Full Name".into(), p.full_name.clone()],
            vec!["NIC".into(), p.nic.clone()],
            vec!["Phone".into(), p.phone_number.clone()],
            vec!["Date of Birth".into(), fmt_date(&p.dob)],
            vec!["Address".into(), p.address.clone()],
            vec!["Customer Since".into(), fmt_date(&p.created_at)],
        ],
    );
    let recent: Vec<Vec<String>> = data
        .recent_transactions(5)
        .iter()
        .map(|tx| {
            vec![
                fmt_date(&tx.created_at),
                tx.r#type.clone(),
                tx.description.clone(),
                format!("{}{}", tx.direction.sign(), fmt_currency(tx.amount)),
            ]
        })
        .collect();
    format!(
        "Profile Information\n{}\n\nRecent Transactions\n{}",
        profile,
        pretty_table(&["Date", "Type", "Description", "Amount"], recent)
    )
}

fn render_accounts(data: &CustomerData) -> String {
    let rows: Vec<Vec<String>> = data
        .accounts
        .iter()
        .map(|a| {
            vec![
                a.account_no.clone(),
                a.savings_plan.clone(),
                a.status.to_uppercase(),
                a.branch_name.clone(),
                fmt_day(a.opened_date),
                fmt_currency(a.balance),
            ]
        })
        .collect();
    format!(
        "Your Accounts ({} Total)\n{}",
        data.accounts.len(),
        pretty_table(
            &["Account No", "Plan", "Status", "Branch", "Opened", "Balance"],
            rows
        )
    )
}

fn render_transactions(data: &CustomerData) -> String {
    let rows: Vec<Vec<String>> = data
        .transactions
        .iter()
        .map(|tx| {
            vec![
                fmt_date(&tx.created_at),
                tx.reference_no.clone(),
                tx.r#type.clone(),
                tx.description.clone(),
                tx.account_no.clone(),
                format!("{}{}", tx.direction.sign(), fmt_currency(tx.amount)),
            ]
        })
        .collect();
    format!(
        "Transaction History\n{}",
        pretty_table(
            &["Date", "Reference", "Type", "Description", "Account", "Amount"],
            rows
        )
    )
}

fn render_fixed_deposits(data: &CustomerData, today: NaiveDate) -> String {
    let rows: Vec<Vec<String>> = data
        .fixed_deposits
        .iter()
        .map(|fd| {
            let progress = if fd.is_active() {
                format!(
                    "{}%",
                    maturity_progress(fd.opened_date, fd.maturity_date, today)
                )
            } else {
                "-".to_string()
            };
            vec![
                fd.fd_account_no.clone(),
                fd.status.to_uppercase(),
                fmt_currency(fd.balance),
                format!("{}% p.a.", fd.interest_rate),
                format!("{} months", fd.duration),
                fmt_day(fd.opened_date),
                fmt_day(fd.maturity_date),
                progress,
            ]
        })
        .collect();
    format!(
        "Fixed Deposits ({} Total)\n{}",
        data.fixed_deposits.len(),
        pretty_table(
            &[
                "FD Account", "Status", "Balance", "Rate", "Duration", "Opened", "Matures",
                "Progress",
            ],
            rows
        )
    )
}

/// Both dates must be present and well-formed, and the range must not be
/// reversed. Rejects before any network activity.
pub fn validate_report_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate)> {
    if start.trim().is_empty() || end.trim().is_empty() {
        return Err(PassbookError::Validation(
            "Please select both start and end dates.".to_string(),
        ));
    }
    let start = parse_date(start.trim())?;
    let end = parse_date(end.trim())?;
    if start > end {
        return Err(PassbookError::Validation(format!(
            "start date {} is after end date {}",
            start, end
        )));
    }
    Ok((start, end))
}

/// Fetch the PDF transaction report and write it next to the caller as
/// `transactions_<start>_to_<end>.pdf`. A failed download surfaces as
/// `Download` and never touches the session, unlike the main data fetch.
pub fn download_report<A: CustomerApi>(
    api: &A,
    store: &SessionStore,
    start: &str,
    end: &str,
    out_dir: &Path,
) -> Result<PathBuf> {
    let (start, end) = validate_report_range(start, end)?;
    let token = store.token()?.ok_or(PassbookError::MissingCredential)?;
    let bytes = api
        .transactions_report_pdf(&token, start, end)
        .map_err(|e| PassbookError::Download(e.to_string()))?;
    let path = out_dir.join(format!("transactions_{}_to_{}.pdf", start, end));
    std::fs::write(&path, &bytes)?;
    Ok(path)
}
