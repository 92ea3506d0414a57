// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::models::Transaction;
use crate::store::SessionStore;
use crate::view;

pub fn handle(store: &SessionStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &SessionStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let api = ApiClient::new(store.base_url()?)?;
    let data = view::fetch_gated(store, &api)?;

    match fmt.as_str() {
        "csv" => write_transactions_csv(&data.transactions, out)?,
        "json" => write_transactions_json(&data.transactions, out)?,
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!(
        "Exported {} transactions to {}",
        data.transactions.len(),
        out
    );
    Ok(())
}

pub fn write_transactions_csv(transactions: &[Transaction], out: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record([
        "date",
        "reference_no",
        "type",
        "direction",
        "description",
        "account_no",
        "amount",
    ])?;
    for tx in transactions {
        let amount = tx.amount.to_string();
        wtr.write_record([
            tx.created_at.as_str(),
            tx.reference_no.as_str(),
            tx.r#type.as_str(),
            tx.direction.as_str(),
            tx.description.as_str(),
            tx.account_no.as_str(),
            amount.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_transactions_json(transactions: &[Transaction], out: &str) -> Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(transactions)?)?;
    Ok(())
}
