// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_network::Transport;
use mpcdb_secret::SecretEngine;
use mpcdb_sql::ast::DropTableStatement;
use tracing::instrument;

use crate::{Message, Result, session::Session};

impl<E: SecretEngine, T: Transport> Session<E, T> {
	#[instrument(name = "engine::table::drop", level = "debug", skip(self, statement), fields(table = %statement.name))]
	pub(crate) fn drop_table(&mut self, statement: DropTableStatement) -> Result<String> {
		self.catalog.current_mut()?.drop_table(&statement.name)?;
		self.broadcast(&Message::DropTable {
			name: statement.name.clone(),
		})?;
		self.collect_acks()?;
		Ok(format!("Table `{}` dropped.", statement.name))
	}

	pub(crate) fn apply_drop_table(&mut self, name: &str) -> Result<()> {
		self.catalog.current_mut()?.drop_table(name)?;
		Ok(())
	}
}
