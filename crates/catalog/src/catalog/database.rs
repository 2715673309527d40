// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::{
	diagnostic::catalog::{database_already_exists, database_not_found},
	return_error,
};
use tracing::{debug, instrument};

use crate::{Catalog, Database, Result};

impl Catalog {
	#[instrument(name = "catalog::database::create", level = "debug", skip(self))]
	pub fn create_database(&mut self, name: &str) -> Result<()> {
		if self.databases.contains_key(name) {
			return_error!(database_already_exists(name));
		}
		self.databases.insert(name.to_string(), Database::new(name));
		Ok(())
	}

	/// Drops `name`, clearing the selection when it pointed there.
	#[instrument(name = "catalog::database::drop", level = "debug", skip(self))]
	pub fn drop_database(&mut self, name: &str) -> Result<()> {
		if self.databases.shift_remove(name).is_none() {
			return_error!(database_not_found(name));
		}
		if self.current.as_deref() == Some(name) {
			debug!(database = name, "dropped the selected database");
			self.current = None;
		}
		Ok(())
	}

	#[instrument(name = "catalog::database::use", level = "debug", skip(self))]
	pub fn use_database(&mut self, name: &str) -> Result<()> {
		if !self.databases.contains_key(name) {
			return_error!(database_not_found(name));
		}
		self.current = Some(name.to_string());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use crate::Catalog;

	#[test]
	fn test_create_database() {
		let mut catalog = Catalog::new();
		catalog.create_database("shop").unwrap();
		assert!(catalog.database("shop").is_some());

		let err = catalog.create_database("shop").unwrap_err();
		assert_eq!(err.diagnostic().code, "CA_001");
		assert_eq!(catalog.databases().count(), 1);
	}

	#[test]
	fn test_use_database() {
		let mut catalog = Catalog::new();
		assert_eq!(catalog.current().unwrap_err().code, "CA_006");

		catalog.create_database("shop").unwrap();
		catalog.use_database("shop").unwrap();
		assert_eq!(catalog.current().unwrap().name(), "shop");
		assert_eq!(catalog.current_name(), Some("shop"));
	}

	#[test]
	fn test_use_missing_database_keeps_selection() {
		let mut catalog = Catalog::new();
		catalog.create_database("shop").unwrap();
		catalog.use_database("shop").unwrap();

		let err = catalog.use_database("nope").unwrap_err();
		assert_eq!(err.diagnostic().code, "CA_002");
		assert_eq!(catalog.current_name(), Some("shop"));
	}

	#[test]
	fn test_drop_current_database_clears_selection() {
		let mut catalog = Catalog::new();
		catalog.create_database("a").unwrap();
		catalog.create_database("b").unwrap();
		catalog.use_database("a").unwrap();

		catalog.drop_database("b").unwrap();
		assert_eq!(catalog.current_name(), Some("a"));

		catalog.drop_database("a").unwrap();
		assert_eq!(catalog.current_name(), None);
		assert_eq!(catalog.current_mut().unwrap_err().code, "CA_006");
	}

	#[test]
	fn test_drop_missing_database() {
		let mut catalog = Catalog::new();
		let err = catalog.drop_database("ghost").unwrap_err();
		assert_eq!(err.diagnostic().code, "CA_002");
	}

	#[test]
	fn test_databases_keep_creation_order() {
		let mut catalog = Catalog::new();
		for name in ["c", "a", "b"] {
			catalog.create_database(name).unwrap();
		}
		assert_eq!(catalog.databases().collect::<Vec<_>>(), vec!["c", "a", "b"]);
	}
}
