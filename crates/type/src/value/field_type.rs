// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The type of a stored column. Integers are two's-complement of the given
/// width; `Bit` is a single secret-shared boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
	Bit,
	Int8,
	Int16,
	Int32,
	Int64,
}

impl FieldType {
	pub const ALL: [FieldType; 5] =
		[FieldType::Bit, FieldType::Int8, FieldType::Int16, FieldType::Int32, FieldType::Int64];

	pub fn width(&self) -> u32 {
		match self {
			FieldType::Bit => 1,
			FieldType::Int8 => 8,
			FieldType::Int16 => 16,
			FieldType::Int32 => 32,
			FieldType::Int64 => 64,
		}
	}

	pub fn from_width(width: u32) -> Option<FieldType> {
		match width {
			1 => Some(FieldType::Bit),
			8 => Some(FieldType::Int8),
			16 => Some(FieldType::Int16),
			32 => Some(FieldType::Int32),
			64 => Some(FieldType::Int64),
			_ => None,
		}
	}

	pub fn is_bit(&self) -> bool {
		matches!(self, FieldType::Bit)
	}

	/// Inclusive range of plaintexts accepted on insert.
	pub fn range(&self) -> (i64, i64) {
		match self {
			FieldType::Bit => (0, 1),
			FieldType::Int8 => (i8::MIN as i64, i8::MAX as i64),
			FieldType::Int16 => (i16::MIN as i64, i16::MAX as i64),
			FieldType::Int32 => (i32::MIN as i64, i32::MAX as i64),
			FieldType::Int64 => (i64::MIN, i64::MAX),
		}
	}

	pub fn contains(&self, value: i64) -> bool {
		let (min, max) = self.range();
		value >= min && value <= max
	}

	/// Bit mask selecting the low `width` bits of a share.
	pub fn mask(&self) -> u64 {
		match self.width() {
			64 => u64::MAX,
			w => (1u64 << w) - 1,
		}
	}

	/// Interprets the low `width` bits of `raw` as a signed value.
	pub fn sign_extend(&self, raw: u64) -> i64 {
		match self {
			FieldType::Bit => (raw & 1) as i64,
			FieldType::Int8 => raw as u8 as i8 as i64,
			FieldType::Int16 => raw as u16 as i16 as i64,
			FieldType::Int32 => raw as u32 as i32 as i64,
			FieldType::Int64 => raw as i64,
		}
	}

	/// Resolves a SQL type name. `INT(n)` style declarations go through
	/// [`FieldType::from_width`] instead.
	pub fn from_sql_name(name: &str) -> Option<FieldType> {
		match name.to_ascii_uppercase().as_str() {
			"BOOLEAN" | "BOOL" => Some(FieldType::Bit),
			"TINYINT" | "INT8" => Some(FieldType::Int8),
			"SMALLINT" | "INT16" => Some(FieldType::Int16),
			"INT" | "INTEGER" | "INT32" => Some(FieldType::Int32),
			"BIGINT" | "LONG" | "INT64" => Some(FieldType::Int64),
			_ => None,
		}
	}
}

impl Display for FieldType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			FieldType::Bit => f.write_str("BIT"),
			FieldType::Int8 => f.write_str("INT8"),
			FieldType::Int16 => f.write_str("INT16"),
			FieldType::Int32 => f.write_str("INT32"),
			FieldType::Int64 => f.write_str("INT64"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::FieldType;

	#[test]
	fn test_width_round_trip() {
		for ty in FieldType::ALL {
			assert_eq!(FieldType::from_width(ty.width()), Some(ty));
		}
		assert_eq!(FieldType::from_width(12), None);
	}

	#[test]
	fn test_int8_range() {
		assert!(FieldType::Int8.contains(-128));
		assert!(FieldType::Int8.contains(127));
		assert!(!FieldType::Int8.contains(128));
		assert!(!FieldType::Int8.contains(255));
		assert!(!FieldType::Int8.contains(256));
	}

	#[test]
	fn test_bit_range() {
		assert!(FieldType::Bit.contains(0));
		assert!(FieldType::Bit.contains(1));
		assert!(!FieldType::Bit.contains(2));
		assert!(!FieldType::Bit.contains(-1));
	}

	#[test]
	fn test_int64_accepts_extremes() {
		assert!(FieldType::Int64.contains(i64::MIN));
		assert!(FieldType::Int64.contains(i64::MAX));
	}

	#[test]
	fn test_sign_extend() {
		assert_eq!(FieldType::Int8.sign_extend(0xff), -1);
		assert_eq!(FieldType::Int8.sign_extend(0x7f), 127);
		assert_eq!(FieldType::Int16.sign_extend(0x8000), -32768);
		assert_eq!(FieldType::Int32.sign_extend(u64::MAX), -1);
		assert_eq!(FieldType::Bit.sign_extend(3), 1);
	}

	#[test]
	fn test_mask() {
		assert_eq!(FieldType::Bit.mask(), 1);
		assert_eq!(FieldType::Int8.mask(), 0xff);
		assert_eq!(FieldType::Int64.mask(), u64::MAX);
	}

	#[test]
	fn test_sql_names() {
		assert_eq!(FieldType::from_sql_name("bool"), Some(FieldType::Bit));
		assert_eq!(FieldType::from_sql_name("TinyInt"), Some(FieldType::Int8));
		assert_eq!(FieldType::from_sql_name("smallint"), Some(FieldType::Int16));
		assert_eq!(FieldType::from_sql_name("INTEGER"), Some(FieldType::Int32));
		assert_eq!(FieldType::from_sql_name("long"), Some(FieldType::Int64));
		assert_eq!(FieldType::from_sql_name("varchar"), None);
	}
}
