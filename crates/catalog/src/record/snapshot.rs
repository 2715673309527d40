// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_secret::{SecretBit, SecretValue};
use mpcdb_type::FieldType;

use crate::{Record, Result};

/// A detached copy of a row used while evaluating a query.
///
/// `valid` is a secret tag telling real rows from sort padding. `padding` is
/// the public counterpart: it is set only on copies appended to round the
/// working set up to a power of two, which every party does identically.
#[derive(Debug, Clone)]
pub struct Snapshot {
	names: Vec<String>,
	types: Vec<FieldType>,
	values: Vec<SecretValue>,
	valid: SecretBit,
	padding: bool,
}

impl Snapshot {
	pub fn new(valid: SecretBit) -> Self {
		Self {
			names: Vec::new(),
			types: Vec::new(),
			values: Vec::new(),
			valid,
			padding: false,
		}
	}

	pub(crate) fn from_parts(
		names: Vec<String>,
		types: Vec<FieldType>,
		values: Vec<SecretValue>,
		valid: SecretBit,
	) -> Self {
		Self {
			names,
			types,
			values,
			valid,
			padding: false,
		}
	}

	/// A publicly flagged padding duplicate carrying `invalid` as its tag.
	pub fn padding_copy(&self, invalid: SecretBit) -> Self {
		Self {
			names: self.names.clone(),
			types: self.types.clone(),
			values: self.values.clone(),
			valid: invalid,
			padding: true,
		}
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn types(&self) -> &[FieldType] {
		&self.types
	}

	pub fn values_mut(&mut self) -> &mut [SecretValue] {
		&mut self.values
	}

	pub fn valid(&self) -> &SecretBit {
		&self.valid
	}

	pub fn set_valid(&mut self, valid: SecretBit) {
		self.valid = valid;
	}

	pub fn is_padding(&self) -> bool {
		self.padding
	}
}

impl Record for Snapshot {
	fn values(&self) -> &[SecretValue] {
		&self.values
	}

	fn add_field(&mut self, name: &str, value: SecretValue) -> Result<()> {
		self.names.push(name.to_string());
		self.types.push(value.ty());
		self.values.push(value);
		Ok(())
	}

	fn type_of(&self, idx: usize) -> Option<FieldType> {
		self.types.get(idx).copied()
	}

	fn index_of(&self, name: &str) -> Option<usize> {
		self.names.iter().position(|field| field == name)
	}
}
