// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table configuration.
use serde::{Deserialize, Serialize};

use crate::Chips;

/// The table stakes and betting rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// The small blind.
    pub small_blind: Chips,
    /// The big blind.
    pub big_blind: Chips,
    /// The ante posted by every player with chips, zero for no ante.
    pub ante: Chips,
    /// Maximum number of bets and raises per street, zero is unlimited.
    pub max_raises_per_street: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: Chips::new(1),
            big_blind: Chips::new(2),
            ante: Chips::ZERO,
            max_raises_per_street: 0,
        }
    }
}
