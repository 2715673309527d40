// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{FieldType, error::diagnostic::Diagnostic};

pub fn arity_mismatch(columns: usize, values: usize) -> Diagnostic {
	Diagnostic {
		code: "VALUE_001".to_string(),
		statement: None,
		message: "Unmatched parameter numbers.".to_string(),
		label: Some(format!("{} column(s) but {} value(s)", columns, values)),
		help: Some("supply exactly one value per listed column".to_string()),
		notes: vec![],
	}
}

pub fn unsupported_value(column: &str) -> Diagnostic {
	Diagnostic {
		code: "VALUE_002".to_string(),
		statement: None,
		message: "Unsupported value type.".to_string(),
		label: Some(format!("value for field `{}` is not an integer literal", column)),
		help: Some("only integer literals, optionally negated (e.g. -5), can be inserted".to_string()),
		notes: vec![],
	}
}

pub fn value_out_of_range(column: &str, value: i128, ty: FieldType) -> Diagnostic {
	let (min, max) = ty.range();
	Diagnostic {
		code: "VALUE_003".to_string(),
		statement: None,
		message: "Inserted parameters out of range.".to_string(),
		label: Some(format!("{} does not fit field `{}` of type {}", value, column, ty)),
		help: Some(format!("values for {} must lie within {}..={}", ty, min, max)),
		notes: vec![],
	}
}
