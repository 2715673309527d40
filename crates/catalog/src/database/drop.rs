// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::{diagnostic::catalog::table_not_found, error};
use tracing::instrument;

use crate::{Database, Result, Table};

impl Database {
	/// Removes the table and hands it back.
	#[instrument(name = "catalog::table::drop", level = "debug", skip(self))]
	pub fn drop_table(&mut self, name: &str) -> Result<Table> {
		self.tables.shift_remove(name).ok_or_else(|| error!(table_not_found(name)))
	}
}
