// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::trace;

use crate::{Rank, Result, Transport, TransportError};

/// Fully connected in-memory network: one unbounded FIFO per ordered pair of
/// ranks.
pub struct Mesh {
	pub client: Endpoint,
	pub parties: Vec<Endpoint>,
}

impl Mesh {
	pub fn new(parties: usize) -> Self {
		let slots = parties + 1;

		// links[from][to]
		let mut senders: Vec<Vec<Option<Sender<Vec<u8>>>>> = vec![vec![None; slots]; slots];
		let mut receivers: Vec<Vec<Option<Receiver<Vec<u8>>>>> = vec![vec![None; slots]; slots];
		for from in 0..slots {
			for to in 0..slots {
				if from == to {
					continue;
				}
				let (tx, rx) = unbounded();
				senders[from][to] = Some(tx);
				receivers[to][from] = Some(rx);
			}
		}

		let mut endpoints: Vec<Endpoint> = senders
			.into_iter()
			.zip(receivers)
			.enumerate()
			.map(|(slot, (outgoing, incoming))| {
				let rank = if slot == parties {
					Rank::Client
				} else {
					Rank::Party(slot)
				};
				Endpoint {
					rank,
					parties,
					links: Arc::new(Links {
						outgoing,
						incoming,
					}),
				}
			})
			.collect();

		let client = endpoints.remove(parties);
		Self {
			client,
			parties: endpoints,
		}
	}
}

struct Links {
	outgoing: Vec<Option<Sender<Vec<u8>>>>,
	incoming: Vec<Option<Receiver<Vec<u8>>>>,
}

/// One rank's view of the mesh. Clones share the same channels, so the
/// secret engine and the command layer of a process can both hold one.
#[derive(Clone)]
pub struct Endpoint {
	rank: Rank,
	parties: usize,
	links: Arc<Links>,
}

impl Endpoint {
	fn slot(&self, rank: Rank) -> std::result::Result<usize, TransportError> {
		match rank.slot(self.parties) {
			Some(slot) if rank != self.rank => Ok(slot),
			_ => Err(TransportError::UnknownRank {
				rank,
			}),
		}
	}
}

impl Transport for Endpoint {
	fn rank(&self) -> Rank {
		self.rank
	}

	fn parties(&self) -> usize {
		self.parties
	}

	fn send(&self, to: Rank, bytes: Vec<u8>) -> Result<()> {
		let slot = self.slot(to)?;
		let sender = self.links.outgoing[slot].as_ref().ok_or(TransportError::UnknownRank {
			rank: to,
		})?;
		trace!(from = %self.rank, to = %to, len = bytes.len(), "send");
		sender.send(bytes).map_err(|_| TransportError::Disconnected {
			peer: to,
		})?;
		Ok(())
	}

	fn recv(&self, from: Rank) -> Result<Vec<u8>> {
		let slot = self.slot(from)?;
		let receiver = self.links.incoming[slot].as_ref().ok_or(TransportError::UnknownRank {
			rank: from,
		})?;
		let bytes = receiver.recv().map_err(|_| TransportError::Disconnected {
			peer: from,
		})?;
		trace!(at = %self.rank, from = %from, len = bytes.len(), "recv");
		Ok(bytes)
	}
}
