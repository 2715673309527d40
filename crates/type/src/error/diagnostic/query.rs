// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn order_column_not_found(column: &str) -> Diagnostic {
	Diagnostic {
		code: "QUERY_001".to_string(),
		statement: None,
		message: format!("Order column `{}` not found.", column),
		label: Some("this column does not exist in the rows being sorted".to_string()),
		help: None,
		notes: vec![],
	}
}

pub fn empty_order_keys() -> Diagnostic {
	Diagnostic {
		code: "QUERY_003".to_string(),
		statement: None,
		message: "Sorting requires at least one order key.".to_string(),
		label: None,
		help: None,
		notes: vec![],
	}
}
