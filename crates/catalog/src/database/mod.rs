// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;

pub use create::TableToCreate;

use crate::Table;

mod create;
mod drop;

/// A named, insertion-ordered set of tables.
#[derive(Debug, Clone)]
pub struct Database {
	name: String,
	tables: IndexMap<String, Table>,
}

impl Database {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			tables: IndexMap::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn table(&self, name: &str) -> Option<&Table> {
		self.tables.get(name)
	}

	pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
		self.tables.get_mut(name)
	}

	/// Table names in creation order.
	pub fn tables(&self) -> impl Iterator<Item = &str> {
		self.tables.keys().map(String::as_str)
	}
}
