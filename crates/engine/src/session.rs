// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_catalog::Catalog;
use mpcdb_network::{Rank, Transport};
use mpcdb_secret::SecretEngine;
use mpcdb_type::{
	diagnostic::protocol::{malformed_message, party_failed},
	return_error,
};
use tracing::warn;

use crate::{Message, Reply, Result};

/// The state every process carries: its own catalog, its share engine and the
/// transport both the engine and the command layer talk through.
pub(crate) struct Session<E: SecretEngine, T: Transport> {
	pub(crate) catalog: Catalog,
	pub(crate) engine: E,
	pub(crate) transport: T,
}

impl<E: SecretEngine, T: Transport> Session<E, T> {
	pub(crate) fn new(engine: E, transport: T) -> Self {
		Self {
			catalog: Catalog::new(),
			engine,
			transport,
		}
	}

	pub(crate) fn broadcast(&self, message: &Message) -> Result<()> {
		self.transport.broadcast(&message.encode()?)
	}

	pub(crate) fn reply(&self, reply: &Reply) -> Result<()> {
		self.transport.send(Rank::Client, reply.encode()?)
	}

	pub(crate) fn recv_reply(&self, party: usize) -> Result<Reply> {
		Reply::decode(&self.transport.recv(Rank::Party(party))?)
	}

	/// Reads one acknowledgement from every party, in rank order. All acks are
	/// drained even after a failure; the first failing party is reported.
	pub(crate) fn collect_acks(&self) -> Result<()> {
		let mut failure: Option<(usize, String)> = None;
		for party in 0..self.transport.parties() {
			match self.recv_reply(party)? {
				Reply::Ack {
					error: None,
				} => {}
				Reply::Ack {
					error: Some(reason),
				} => {
					warn!(party, %reason, "party rejected command");
					failure.get_or_insert((party, reason));
				}
				other => {
					return_error!(malformed_message(format!("expected an ack from party {}, got {:?}", party, other)))
				}
			}
		}

		if let Some((party, reason)) = failure {
			return_error!(party_failed(party, &reason));
		}
		Ok(())
	}
}
