// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

/// Plaintext fields of a record after a collective reveal. The only row shape
/// that can be printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedRow {
	pub values: Vec<i64>,
}

impl RevealedRow {
	pub fn new(values: Vec<i64>) -> Self {
		Self {
			values,
		}
	}
}

impl Display for RevealedRow {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for value in &self.values {
			write!(f, "{:>10}", value)?;
		}
		Ok(())
	}
}
