// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Logical address of a process: the distinguished client or a compute party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
	Client,
	Party(usize),
}

impl Rank {
	pub fn is_client(&self) -> bool {
		matches!(self, Rank::Client)
	}

	pub fn party(&self) -> Option<usize> {
		match self {
			Rank::Client => None,
			Rank::Party(id) => Some(*id),
		}
	}

	/// Dense slot used by the in-memory mesh: parties first, client last.
	pub(crate) fn slot(&self, parties: usize) -> Option<usize> {
		match self {
			Rank::Party(id) if *id < parties => Some(*id),
			Rank::Party(_) => None,
			Rank::Client => Some(parties),
		}
	}
}

impl Display for Rank {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Rank::Client => f.write_str("client"),
			Rank::Party(id) => write!(f, "party {}", id),
		}
	}
}
