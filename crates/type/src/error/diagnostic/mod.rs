// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Diagnostics reported back to the client.
//!
//! Every failure a command can hit is described by a [`Diagnostic`] built by
//! one of the functions in the submodules. The code prefix identifies the
//! family: `SQL_` syntax, `CA_` schema, `VALUE_` literal values, `QUERY_`
//! ordering, `PROTOCOL_` cross-party protocol and `NET_` transport.

use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod config;
pub mod network;
pub mod protocol;
pub mod query;
pub mod sql;
pub mod value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub statement: Option<String>,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Diagnostic {
	pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
		self.statement = Some(statement.into());
		self
	}

	/// Multi-line rendering used by the CLI and `Display`.
	pub fn render(&self) -> String {
		let mut out = String::new();
		let _ = write!(out, "[{}] {}", self.code, self.message);
		if let Some(statement) = &self.statement {
			let _ = write!(out, "\n  statement: {}", statement);
		}
		if let Some(label) = &self.label {
			let _ = write!(out, "\n  {}", label);
		}
		if let Some(help) = &self.help {
			let _ = write!(out, "\n  help: {}", help);
		}
		for note in &self.notes {
			let _ = write!(out, "\n  note: {}", note);
		}
		out
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

#[cfg(test)]
mod tests {
	use super::catalog::table_already_exists;

	#[test]
	fn test_render_contains_code_and_help() {
		let rendered = table_already_exists("t").render();
		assert!(rendered.starts_with("[CA_003] Table `t` already exists."));
		assert!(rendered.contains("help:"));
	}

	#[test]
	fn test_with_statement() {
		let diagnostic = table_already_exists("t").with_statement("create table t (a int)");
		assert_eq!(diagnostic.statement.as_deref(), Some("create table t (a int)"));
		assert!(diagnostic.render().contains("statement: create table t (a int)"));
	}
}
