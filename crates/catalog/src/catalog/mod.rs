// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use mpcdb_type::{diagnostic::catalog::no_database_selected, error};

use crate::{Database, Result};

mod database;

/// Per-process schema state: every database plus the one currently selected.
///
/// Each process builds exactly one catalog and hands it to the command layer;
/// the replicated protocol keeps the copies of all parties identical.
#[derive(Debug, Default)]
pub struct Catalog {
	databases: IndexMap<String, Database>,
	current: Option<String>,
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn database(&self, name: &str) -> Option<&Database> {
		self.databases.get(name)
	}

	/// Database names in creation order.
	pub fn databases(&self) -> impl Iterator<Item = &str> {
		self.databases.keys().map(String::as_str)
	}

	pub fn current_name(&self) -> Option<&str> {
		self.current.as_deref()
	}

	pub fn current(&self) -> Result<&Database> {
		self.current
			.as_ref()
			.and_then(|name| self.databases.get(name))
			.ok_or_else(|| error!(no_database_selected()))
	}

	pub fn current_mut(&mut self) -> Result<&mut Database> {
		match self.current.as_ref() {
			Some(name) => self.databases.get_mut(name).ok_or_else(|| error!(no_database_selected())),
			None => Err(error!(no_database_selected())),
		}
	}
}
