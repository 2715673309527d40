// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::FieldType;

/// One party's share of a secret boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretBit {
	pub(crate) share: bool,
}

/// One party's share of a secret bit or fixed-width integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretValue {
	pub(crate) ty: FieldType,
	pub(crate) share: u64,
}

impl SecretBit {
	/// A share of `false` that needs no communication: every party holding
	/// zero reconstructs to zero.
	pub fn zero() -> Self {
		Self {
			share: false,
		}
	}
}

impl SecretValue {
	/// A share of zero of the given type; see [`SecretBit::zero`].
	pub fn zero(ty: FieldType) -> Self {
		Self {
			ty,
			share: 0,
		}
	}

	pub fn ty(&self) -> FieldType {
		self.ty
	}
}
