// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::SessionStore;

pub fn handle(store: &SessionStore) -> Result<()> {
    store.clear()?;
    println!("Signed out.");
    Ok(())
}
