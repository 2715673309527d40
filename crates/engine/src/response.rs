// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	time::Duration,
};

use mpcdb_catalog::RevealedRow;
use mpcdb_type::Error;

/// Plaintext rows revealed to the client by a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	pub columns: Vec<String>,
	pub rows: Vec<RevealedRow>,
}

impl Display for Frame {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for column in &self.columns {
			write!(f, "{:>10}", column)?;
		}
		writeln!(f)?;
		for row in &self.rows {
			writeln!(f, "{}", row)?;
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
	Message(String),
	Frame(Frame),
}

/// Everything one line of input produced.
///
/// Statements run in order until the first failure; outputs of the ones that
/// succeeded are kept.
#[derive(Debug)]
pub struct Response {
	pub outputs: Vec<Output>,
	pub error: Option<Error>,
	pub elapsed: Duration,
}

impl Response {
	pub fn is_ok(&self) -> bool {
		self.error.is_none()
	}

	pub fn messages(&self) -> impl Iterator<Item = &str> {
		self.outputs.iter().filter_map(|output| match output {
			Output::Message(message) => Some(message.as_str()),
			Output::Frame(_) => None,
		})
	}

	pub fn frames(&self) -> impl Iterator<Item = &Frame> {
		self.outputs.iter().filter_map(|output| match output {
			Output::Frame(frame) => Some(frame),
			Output::Message(_) => None,
		})
	}

	/// The rendered response without the trailing timing line.
	pub fn body(&self) -> String {
		let mut out = String::new();
		for output in &self.outputs {
			match output {
				Output::Message(message) => {
					out.push_str("OK. ");
					out.push_str(message);
					out.push('\n');
				}
				Output::Frame(frame) => out.push_str(&frame.to_string()),
			}
		}
		if let Some(error) = &self.error {
			out.push_str("Failed. ");
			out.push_str(&error.message);
			out.push('\n');
		}
		out
	}
}

impl Display for Response {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}({} ms)", self.body(), self.elapsed.as_millis())
	}
}
