// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub customer_id: String,
    pub full_name: String,
    pub nic: String,
    pub address: String,
    pub phone_number: String,
    pub dob: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub acc_id: String,
    pub account_no: String,
    pub balance: Decimal,
    pub status: String,
    pub opened_date: NaiveDate,
    pub branch_name: String,
    pub branch_id: String,
    pub savings_plan: String,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// Whether a transaction increases or decreases the displayed balance.
/// Tagged once at ingestion; amounts on the wire are unsigned magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Credit,
    #[default]
    Debit,
}

impl Direction {
    /// Labels are free text; anything mentioning "Deposit" or "Interest"
    /// (case-sensitive) counts as a credit.
    pub fn from_label(label: &str) -> Self {
        if label.contains("Deposit") || label.contains("Interest") {
            Direction::Credit
        } else {
            Direction::Debit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Credit => "credit",
            Direction::Debit => "debit",
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            Direction::Credit => "+",
            Direction::Debit => "-",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub reference_no: String,
    pub amount: Decimal,
    pub r#type: String,
    pub description: String,
    pub created_at: String,
    pub account_no: String,
    #[serde(skip_deserializing, default)]
    pub direction: Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedDeposit {
    pub fd_id: String,
    pub fd_account_no: String,
    pub balance: Decimal,
    pub opened_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub status: String,
    pub linked_savings_account: String,
    pub duration: u32,
    pub interest_rate: f64,
    pub branch_name: String,
}

impl FixedDeposit {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// Server-computed aggregates, displayed as received. Never recomputed or
/// reconciled against the collections on the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_accounts: usize,
    pub active_accounts: usize,
    pub total_savings_balance: Decimal,
    pub total_fd_balance: Decimal,
    pub total_balance: Decimal,
    pub total_transactions: usize,
    pub total_fixed_deposits: usize,
    pub active_fixed_deposits: usize,
}

/// Aggregate root returned by the customer-details endpoint. Built once per
/// successful fetch and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerData {
    pub customer_profile: CustomerProfile,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub fixed_deposits: Vec<FixedDeposit>,
    pub summary: Summary,
}

impl CustomerData {
    /// Classify every transaction from its type label. Runs at ingestion so
    /// renderers and exporters read a stored tag instead of re-deriving it.
    pub fn tag_directions(&mut self) {
        for tx in &mut self.transactions {
            tx.direction = Direction::from_label(&tx.r#type);
        }
    }

    pub fn recent_transactions(&self, n: usize) -> &[Transaction] {
        &self.transactions[..self.transactions.len().min(n)]
    }
}
