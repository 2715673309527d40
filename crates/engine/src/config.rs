// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::{diagnostic::config::invalid_party_count, return_error};

use crate::Result;

/// Seed used when none is configured. Every party must use the same one.
pub const DEFAULT_SEED: u64 = 0x6d70_6364_6273;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
	pub parties: usize,
	pub seed: u64,
}

impl Default for ClusterConfig {
	fn default() -> Self {
		Self {
			parties: 2,
			seed: DEFAULT_SEED,
		}
	}
}

impl ClusterConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn parties(mut self, parties: usize) -> Self {
		self.parties = parties;
		self
	}

	pub fn seed(mut self, seed: u64) -> Self {
		self.seed = seed;
		self
	}

	pub fn validate(&self) -> Result<()> {
		if self.parties < 2 {
			return_error!(invalid_party_count(self.parties));
		}
		Ok(())
	}
}
