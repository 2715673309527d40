// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Instant;

use mpcdb_catalog::Catalog;
use mpcdb_network::Transport;
use mpcdb_secret::SecretEngine;
use mpcdb_sql::ast::Statement;
use mpcdb_type::{
	diagnostic::protocol::{session_closed, session_desynchronized},
	return_error,
};
use tracing::{info, instrument, warn};

use crate::{Intent, Message, Output, Response, Result, session::Session};

/// Drives commands through the cluster on behalf of the user.
///
/// The client keeps its own catalog and checks every command against it
/// before any message leaves the process, so a command it rejects is never
/// seen by the parties. Once a cross-party failure was observed the session
/// refuses further commands.
pub struct Client<E: SecretEngine, T: Transport> {
	session: Session<E, T>,
	desynced: bool,
	closed: bool,
}

impl<E: SecretEngine, T: Transport> Client<E, T> {
	pub fn new(engine: E, transport: T) -> Self {
		Self {
			session: Session::new(engine, transport),
			desynced: false,
			closed: false,
		}
	}

	pub fn catalog(&self) -> &Catalog {
		&self.session.catalog
	}

	pub fn is_closed(&self) -> bool {
		self.closed
	}

	pub fn is_desynced(&self) -> bool {
		self.desynced
	}

	/// Runs one line of input. A line holding several SQL statements stops at
	/// the first failing one.
	#[instrument(name = "engine::client::execute", level = "info", skip(self))]
	pub fn execute(&mut self, input: &str) -> Response {
		let start = Instant::now();
		let mut outputs = Vec::new();

		let result = self.run(input, &mut outputs);
		if let Err(err) = &result {
			if err.code.starts_with("PROTOCOL_") || err.code.starts_with("NET_") {
				if !self.desynced && !self.closed {
					warn!(code = %err.code, "session desynchronized");
				}
				self.desynced = true;
			}
		}

		Response {
			outputs,
			error: result.err(),
			elapsed: start.elapsed(),
		}
	}

	fn run(&mut self, input: &str, outputs: &mut Vec<Output>) -> Result<()> {
		if self.closed {
			return_error!(session_closed());
		}
		if self.desynced {
			return_error!(session_desynchronized());
		}

		match Intent::classify(input)? {
			Intent::CreateDatabase(name) => outputs.push(Output::Message(self.session.create_database(&name)?)),
			Intent::DropDatabase(name) => outputs.push(Output::Message(self.session.drop_database(&name)?)),
			Intent::UseDatabase(name) => outputs.push(Output::Message(self.session.use_database(&name)?)),
			Intent::Exit => {
				self.session.broadcast(&Message::Exit)?;
				self.session.collect_acks()?;
				self.closed = true;
				info!("cluster shut down");
				outputs.push(Output::Message("Bye.".to_string()));
			}
			Intent::Statements(sql) => {
				let statements = mpcdb_sql::parse(&sql).map_err(|mut err| {
					err.statement = Some(sql.clone());
					err
				})?;
				for statement in statements {
					outputs.push(self.statement(statement)?);
				}
			}
		}
		Ok(())
	}

	fn statement(&mut self, statement: Statement) -> Result<Output> {
		Ok(match statement {
			Statement::CreateTable(create) => Output::Message(self.session.create_table(create)?),
			Statement::DropTable(drop) => Output::Message(self.session.drop_table(drop)?),
			Statement::Insert(insert) => Output::Message(self.session.insert(insert)?),
			Statement::Select(select) => Output::Frame(self.session.select(select)?),
		})
	}
}
