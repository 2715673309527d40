// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::{
	diagnostic::sql::{missing_database_name, trailing_characters_after_database_name},
	return_error,
};

use crate::Result;

/// What a line of user input asks for, decided from its leading words before
/// any SQL parsing happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
	CreateDatabase(String),
	DropDatabase(String),
	UseDatabase(String),
	Exit,
	/// Anything else is handed to the SQL parser verbatim.
	Statements(String),
}

impl Intent {
	pub fn classify(input: &str) -> Result<Intent> {
		let trimmed = input.trim();
		let bare = trimmed.trim_end_matches(';').trim_end();
		if bare.eq_ignore_ascii_case("exit") || bare.eq_ignore_ascii_case("quit") {
			return Ok(Intent::Exit);
		}

		let mut words = trimmed.split_whitespace();
		let first = words.next().unwrap_or_default().to_ascii_lowercase();

		match first.trim_end_matches(';') {
			"use" => {
				let rest = trimmed[first.len()..].trim_start();
				return Ok(Intent::UseDatabase(database_name(rest)?));
			}
			"create" | "drop" => {
				let second = words.next().unwrap_or_default();
				if second.trim_end_matches(';').eq_ignore_ascii_case("database") {
					let after_create = trimmed[first.len()..].trim_start();
					let rest = after_create[second.len()..].trim_start();
					let name = database_name(rest)?;
					return Ok(if first == "create" {
						Intent::CreateDatabase(name)
					} else {
						Intent::DropDatabase(name)
					});
				}
			}
			_ => {}
		}

		Ok(Intent::Statements(input.to_string()))
	}
}

/// Reads `<name>[;]` and rejects anything following it.
fn database_name(rest: &str) -> Result<String> {
	let mut parts = rest.splitn(2, char::is_whitespace);
	let word = parts.next().unwrap_or_default();
	let tail: String = parts.next().unwrap_or_default().chars().filter(|c| !c.is_whitespace()).collect();

	let (name, terminated) = match word.strip_suffix(';') {
		Some(name) => (name, true),
		None => (word, false),
	};

	if !tail.is_empty() && !(tail == ";" && !terminated) {
		return_error!(trailing_characters_after_database_name());
	}
	if name.is_empty() {
		return_error!(missing_database_name());
	}
	if name.contains(';') {
		return_error!(trailing_characters_after_database_name());
	}
	Ok(name.to_string())
}

#[cfg(test)]
mod tests {
	use super::Intent;

	#[test]
	fn test_database_commands() {
		assert_eq!(Intent::classify("create database shop;").unwrap(), Intent::CreateDatabase("shop".into()));
		assert_eq!(Intent::classify("  DROP   DATABASE shop").unwrap(), Intent::DropDatabase("shop".into()));
		assert_eq!(Intent::classify("use shop ;").unwrap(), Intent::UseDatabase("shop".into()));
		assert_eq!(Intent::classify("Use shop").unwrap(), Intent::UseDatabase("shop".into()));
	}

	#[test]
	fn test_missing_database_name() {
		for input in ["create database", "create database;", "drop database ;", "use", "use ;"] {
			let err = Intent::classify(input).unwrap_err();
			assert_eq!(err.code, "SQL_004", "{}", input);
			assert_eq!(err.message, "Syntax error: Missing database name.");
		}
	}

	#[test]
	fn test_trailing_characters() {
		for input in ["create database a b", "use a;;", "drop database a; x", "use a ; ;"] {
			let err = Intent::classify(input).unwrap_err();
			assert_eq!(err.code, "SQL_004", "{}", input);
			assert_eq!(err.message, "Syntax error: Invalid characters after database name.");
		}
	}

	#[test]
	fn test_exit() {
		assert_eq!(Intent::classify("exit").unwrap(), Intent::Exit);
		assert_eq!(Intent::classify("QUIT;").unwrap(), Intent::Exit);
		assert_eq!(Intent::classify(" exit ; ").unwrap(), Intent::Exit);
	}

	#[test]
	fn test_statements_pass_through() {
		let input = "create table t (a int); select * from t";
		assert_eq!(Intent::classify(input).unwrap(), Intent::Statements(input.into()));
		assert_eq!(Intent::classify("exit now").unwrap(), Intent::Statements("exit now".into()));
		assert_eq!(Intent::classify("drop table t").unwrap(), Intent::Statements("drop table t".into()));
	}
}
