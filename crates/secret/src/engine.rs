// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_network::Rank;
use mpcdb_type::FieldType;

use crate::{Result, SecretBit, SecretValue};

/// Collective operations over secret-shared values.
///
/// Every method that returns `Result` is collective: all compute parties (and
/// for `share`/`reconstruct` also the client) must issue the same calls in the
/// same order, otherwise the session desynchronizes. Methods without `Result`
/// are local to the calling process.
pub trait SecretEngine {
	fn rank(&self) -> Rank;

	/// The client deals `plaintext`; parties receive their shares. The value
	/// returned to the client carries no share.
	fn share(&mut self, ty: FieldType, plaintext: i64) -> Result<SecretValue>;

	/// Parties send their shares to the client, which alone gets `Some`.
	fn reconstruct(&mut self, value: &SecretValue) -> Result<Option<i64>>;

	fn reconstruct_bit(&mut self, bit: &SecretBit) -> Result<Option<bool>>;

	/// A publicly known bit in shared form.
	fn constant_bit(&self, value: bool) -> SecretBit;

	fn not(&self, bit: &SecretBit) -> SecretBit;

	fn and(&mut self, left: &SecretBit, right: &SecretBit) -> Result<SecretBit>;

	fn or(&mut self, left: &SecretBit, right: &SecretBit) -> Result<SecretBit>;

	/// Signed `left < right`; both operands must share one type.
	fn less_than(&mut self, left: &SecretValue, right: &SecretValue) -> Result<SecretBit>;

	/// `if_true` when `condition` holds, `if_false` otherwise. Both inputs are
	/// always consumed.
	fn select(&mut self, condition: &SecretBit, if_true: &SecretValue, if_false: &SecretValue) -> Result<SecretValue>;

	fn select_bit(&mut self, condition: &SecretBit, if_true: &SecretBit, if_false: &SecretBit) -> Result<SecretBit>;
}
