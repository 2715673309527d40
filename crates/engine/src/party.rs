// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_catalog::Catalog;
use mpcdb_network::{Rank, Transport};
use mpcdb_secret::SecretEngine;
use tracing::{debug, error, info, instrument};

use crate::{Message, Reply, Result, session::Session};

/// A compute party: applies every command the client broadcasts to its own
/// catalog and answers each with exactly one acknowledgement.
pub struct Party<E: SecretEngine, T: Transport> {
	session: Session<E, T>,
}

impl<E: SecretEngine, T: Transport> Party<E, T> {
	pub fn new(engine: E, transport: T) -> Self {
		Self {
			session: Session::new(engine, transport),
		}
	}

	pub fn rank(&self) -> Rank {
		self.session.transport.rank()
	}

	pub fn catalog(&self) -> &Catalog {
		&self.session.catalog
	}

	pub fn into_catalog(self) -> Catalog {
		self.session.catalog
	}

	/// Serves requests until the client sends `exit`. A command that fails
	/// locally is logged and reported in its ack; only a broken transport
	/// ends the loop early.
	#[instrument(name = "engine::party::handle_requests", level = "info", skip(self), fields(party = %self.rank()))]
	pub fn handle_requests(&mut self) -> Result<()> {
		loop {
			let bytes = self.session.transport.recv(Rank::Client)?;

			let (exit, result) = match Message::decode(&bytes) {
				Ok(message) => {
					debug!(kind = message.kind(), "request");
					(message == Message::Exit, self.apply(message))
				}
				Err(err) => (false, Err(err)),
			};

			let error = match result {
				Ok(()) => None,
				Err(err) => {
					error!(code = %err.code, message = %err.message, "request failed");
					Some(format!("[{}] {}", err.code, err.message))
				}
			};
			self.session.reply(&Reply::Ack {
				error,
			})?;

			if exit {
				info!("exit requested");
				return Ok(());
			}
		}
	}

	fn apply(&mut self, message: Message) -> Result<()> {
		match message {
			Message::CreateDatabase {
				name,
			} => self.session.apply_create_database(&name),
			Message::DropDatabase {
				name,
			} => self.session.apply_drop_database(&name),
			Message::UseDatabase {
				name,
			} => self.session.apply_use_database(&name),
			Message::CreateTable {
				name,
				field_names,
				field_types,
			} => self.session.apply_create_table(&name, &field_names, &field_types),
			Message::DropTable {
				name,
			} => self.session.apply_drop_table(&name),
			Message::Insert {
				name,
			} => self.session.apply_insert(&name),
			Message::Select {
				name,
				field_names,
				order_fields,
				ascendings,
			} => self.session.apply_select(&name, &field_names, order_fields.as_deref(), ascendings.as_deref()),
			Message::Exit => Ok(()),
		}
	}
}
