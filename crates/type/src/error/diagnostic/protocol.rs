// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

/// A compute party acknowledged a command it failed to apply locally.
pub fn party_failed(party: usize, reason: &str) -> Diagnostic {
	Diagnostic {
		code: "PROTOCOL_001".to_string(),
		statement: None,
		message: format!("Compute party {} failed to apply the command: {}", party, reason),
		label: Some("party catalogs may have diverged".to_string()),
		help: Some("restart the cluster; diverged catalogs are not reconciled".to_string()),
		notes: vec!["the command was already applied by the client and possibly by other parties".to_string()],
	}
}

pub fn session_desynchronized() -> Diagnostic {
	Diagnostic {
		code: "PROTOCOL_002".to_string(),
		statement: None,
		message: "Session aborted after a protocol error.".to_string(),
		label: Some("a previous command left the parties out of lockstep".to_string()),
		help: Some("restart the cluster".to_string()),
		notes: vec![],
	}
}

pub fn frame_desync(expected: &str, actual: &str) -> Diagnostic {
	Diagnostic {
		code: "PROTOCOL_003".to_string(),
		statement: None,
		message: format!("Collective call sequence diverged: expected {}, received {}.", expected, actual),
		label: Some("parties issued collective operations in different order or count".to_string()),
		help: None,
		notes: vec!["this condition is fatal for the session".to_string()],
	}
}

pub fn malformed_message(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "PROTOCOL_004".to_string(),
		statement: None,
		message: format!("Malformed protocol message: {}", reason.into()),
		label: None,
		help: None,
		notes: vec![],
	}
}

pub fn not_a_party(operation: &str) -> Diagnostic {
	Diagnostic {
		code: "PROTOCOL_005".to_string(),
		statement: None,
		message: format!("`{}` can only be evaluated by compute parties.", operation),
		label: Some("the client holds no shares".to_string()),
		help: None,
		notes: vec![],
	}
}

pub fn operand_type_mismatch(operation: &str, left: &str, right: &str) -> Diagnostic {
	Diagnostic {
		code: "PROTOCOL_006".to_string(),
		statement: None,
		message: format!("`{}` requires operands of one type, got {} and {}.", operation, left, right),
		label: None,
		help: None,
		notes: vec![],
	}
}

pub fn session_closed() -> Diagnostic {
	Diagnostic {
		code: "PROTOCOL_007".to_string(),
		statement: None,
		message: "Session already closed.".to_string(),
		label: Some("the compute parties were told to exit".to_string()),
		help: None,
		notes: vec![],
	}
}
