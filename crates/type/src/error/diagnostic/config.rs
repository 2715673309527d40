// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn invalid_party_count(parties: usize) -> Diagnostic {
	Diagnostic {
		code: "CFG_001".to_string(),
		statement: None,
		message: format!("A cluster needs at least two compute parties, got {}.", parties),
		label: None,
		help: Some("set --parties (or MPCDB_PARTIES) to 2 or more".to_string()),
		notes: vec![],
	}
}
