// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn peer_disconnected(peer: &str) -> Diagnostic {
	Diagnostic {
		code: "NET_001".to_string(),
		statement: None,
		message: format!("Connection to {} closed.", peer),
		label: None,
		help: Some("the peer process stopped; the session cannot continue".to_string()),
		notes: vec![],
	}
}

pub fn unknown_rank(rank: &str) -> Diagnostic {
	Diagnostic {
		code: "NET_002".to_string(),
		statement: None,
		message: format!("No channel to {}.", rank),
		label: None,
		help: Some("ranks are the client and parties 0..N-1".to_string()),
		notes: vec![],
	}
}

pub fn spawn_failed(role: &str, reason: &str) -> Diagnostic {
	Diagnostic {
		code: "NET_003".to_string(),
		statement: None,
		message: format!("Failed to start {}: {}", role, reason),
		label: None,
		help: None,
		notes: vec![],
	}
}
