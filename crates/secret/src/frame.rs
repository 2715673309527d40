// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use mpcdb_type::{diagnostic::protocol::malformed_message, error};
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Op {
	Share,
	Reconstruct,
	LessThan,
	And,
	Or,
	Select,
}

impl Display for Op {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Op::Share => f.write_str("SHARE"),
			Op::Reconstruct => f.write_str("RECONSTRUCT"),
			Op::LessThan => f.write_str("LESS_THAN"),
			Op::And => f.write_str("AND"),
			Op::Or => f.write_str("OR"),
			Op::Select => f.write_str("SELECT"),
		}
	}
}

/// Unit of exchange between engines. `seq` counts frames per ordered pair of
/// ranks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Frame {
	pub seq: u64,
	pub op: Op,
	pub shares: Vec<u64>,
}

impl Frame {
	pub fn encode(&self) -> Result<Vec<u8>> {
		postcard::to_stdvec(self).map_err(|err| error!(malformed_message(err.to_string())))
	}

	pub fn decode(bytes: &[u8]) -> Result<Self> {
		postcard::from_bytes(bytes).map_err(|err| error!(malformed_message(err.to_string())))
	}
}
