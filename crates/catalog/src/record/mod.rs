// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_secret::SecretValue;
use mpcdb_type::FieldType;

pub use revealed::RevealedRow;
pub use row::Row;
pub use snapshot::Snapshot;

use crate::Result;

mod revealed;
mod row;
mod snapshot;

/// An ordered sequence of secret values whose columns can be resolved by name.
pub trait Record {
	fn values(&self) -> &[SecretValue];

	fn add_field(&mut self, name: &str, value: SecretValue) -> Result<()>;

	fn type_of(&self, idx: usize) -> Option<FieldType>;

	fn index_of(&self, name: &str) -> Option<usize>;

	fn value_of(&self, name: &str) -> Option<&SecretValue> {
		self.index_of(name).and_then(|idx| self.values().get(idx))
	}

	fn len(&self) -> usize {
		self.values().len()
	}

	fn is_empty(&self) -> bool {
		self.values().is_empty()
	}
}
