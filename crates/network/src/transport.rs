// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{Rank, Result};

pub trait Transport: Send {
	/// The rank this endpoint speaks for.
	fn rank(&self) -> Rank;

	/// Number of compute parties in the cluster.
	fn parties(&self) -> usize;

	fn send(&self, to: Rank, bytes: Vec<u8>) -> Result<()>;

	/// Blocks until the next message from `from` arrives.
	fn recv(&self, from: Rank) -> Result<Vec<u8>>;

	/// Sends the same payload to every compute party, in rank order.
	fn broadcast(&self, bytes: &[u8]) -> Result<()> {
		for party in 0..self.parties() {
			self.send(Rank::Party(party), bytes.to_vec())?;
		}
		Ok(())
	}

	/// Every compute party except this endpoint's own rank.
	fn peers(&self) -> Vec<Rank> {
		let me = self.rank();
		(0..self.parties()).map(Rank::Party).filter(|rank| *rank != me).collect()
	}
}
