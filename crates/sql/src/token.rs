// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::{diagnostic::sql::tokenize_error, return_error};

use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
	// Keywords
	Keyword(Keyword),
	// Identifiers
	Ident(String),
	// Literals; integers stay unsigned so that a negated minimum fits
	Integer(u64),
	Float(f64),
	StringLit(String),
	// Operators & punctuation
	Asterisk,   // *
	Comma,      // ,
	Dot,        // .
	Semicolon,  // ;
	OpenParen,  // (
	CloseParen, // )
	Plus,       // +
	Minus,      // -
	Slash,      // /
	Percent,    // %
	Eq,         // =
	NotEq,      // <> or !=
	Lt,         // <
	Gt,         // >
	LtEq,       // <=
	GtEq,       // >=
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
	Select,
	From,
	Where,
	Order,
	By,
	Asc,
	Desc,
	Limit,
	Group,
	Insert,
	Into,
	Values,
	Update,
	Delete,
	Create,
	Drop,
	Table,
	Database,
	Index,
	Join,
	Null,
	True,
	False,
	Not,
	Primary,
	Key,
}

impl Keyword {
	fn lookup(upper: &str) -> Option<Keyword> {
		let keyword = match upper {
			"SELECT" => Keyword::Select,
			"FROM" => Keyword::From,
			"WHERE" => Keyword::Where,
			"ORDER" => Keyword::Order,
			"BY" => Keyword::By,
			"ASC" => Keyword::Asc,
			"DESC" => Keyword::Desc,
			"LIMIT" => Keyword::Limit,
			"GROUP" => Keyword::Group,
			"INSERT" => Keyword::Insert,
			"INTO" => Keyword::Into,
			"VALUES" => Keyword::Values,
			"UPDATE" => Keyword::Update,
			"DELETE" => Keyword::Delete,
			"CREATE" => Keyword::Create,
			"DROP" => Keyword::Drop,
			"TABLE" => Keyword::Table,
			"DATABASE" => Keyword::Database,
			"INDEX" => Keyword::Index,
			"JOIN" => Keyword::Join,
			"NULL" => Keyword::Null,
			"TRUE" => Keyword::True,
			"FALSE" => Keyword::False,
			"NOT" => Keyword::Not,
			"PRIMARY" => Keyword::Primary,
			"KEY" => Keyword::Key,
			_ => return None,
		};
		Some(keyword)
	}
}

pub fn tokenize(sql: &str) -> Result<Vec<Token>> {
	let mut tokens = Vec::new();
	let chars: Vec<char> = sql.chars().collect();
	let len = chars.len();
	let mut i = 0;

	while i < len {
		let c = chars[i];

		if c.is_ascii_whitespace() {
			i += 1;
			continue;
		}

		// line comments
		if c == '-' && i + 1 < len && chars[i + 1] == '-' {
			while i < len && chars[i] != '\n' {
				i += 1;
			}
			continue;
		}

		let single = match c {
			'*' => Some(Token::Asterisk),
			',' => Some(Token::Comma),
			'.' => Some(Token::Dot),
			';' => Some(Token::Semicolon),
			'(' => Some(Token::OpenParen),
			')' => Some(Token::CloseParen),
			'+' => Some(Token::Plus),
			'-' => Some(Token::Minus),
			'/' => Some(Token::Slash),
			'%' => Some(Token::Percent),
			'=' => Some(Token::Eq),
			_ => None,
		};
		if let Some(token) = single {
			tokens.push(token);
			i += 1;
			continue;
		}

		match c {
			'<' => {
				if i + 1 < len && chars[i + 1] == '=' {
					tokens.push(Token::LtEq);
					i += 2;
				} else if i + 1 < len && chars[i + 1] == '>' {
					tokens.push(Token::NotEq);
					i += 2;
				} else {
					tokens.push(Token::Lt);
					i += 1;
				}
				continue;
			}
			'>' => {
				if i + 1 < len && chars[i + 1] == '=' {
					tokens.push(Token::GtEq);
					i += 2;
				} else {
					tokens.push(Token::Gt);
					i += 1;
				}
				continue;
			}
			'!' => {
				if i + 1 < len && chars[i + 1] == '=' {
					tokens.push(Token::NotEq);
					i += 2;
					continue;
				}
				return_error!(tokenize_error(format!("unexpected character '!' at position {i}")));
			}
			_ => {}
		}

		// string literals, '' escapes a quote
		if c == '\'' {
			let (text, next) = quoted(&chars, i, '\'')?;
			tokens.push(Token::StringLit(text));
			i = next;
			continue;
		}

		// quoted identifiers
		if c == '"' || c == '`' {
			let (text, next) = quoted(&chars, i, c)?;
			tokens.push(Token::Ident(text));
			i = next;
			continue;
		}

		if c.is_ascii_digit() {
			let start = i;
			while i < len && chars[i].is_ascii_digit() {
				i += 1;
			}
			if i < len && chars[i] == '.' && i + 1 < len && chars[i + 1].is_ascii_digit() {
				i += 1;
				while i < len && chars[i].is_ascii_digit() {
					i += 1;
				}
				let text: String = chars[start..i].iter().collect();
				let f: f64 = match text.parse() {
					Ok(f) => f,
					Err(e) => return_error!(tokenize_error(format!("invalid float: {e}"))),
				};
				tokens.push(Token::Float(f));
			} else {
				let text: String = chars[start..i].iter().collect();
				let n: u64 = match text.parse() {
					Ok(n) => n,
					Err(e) => return_error!(tokenize_error(format!("invalid integer {text}: {e}"))),
				};
				tokens.push(Token::Integer(n));
			}
			continue;
		}

		if c.is_ascii_alphabetic() || c == '_' {
			let start = i;
			while i < len && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
				i += 1;
			}
			let word: String = chars[start..i].iter().collect();
			let token = match Keyword::lookup(&word.to_ascii_uppercase()) {
				Some(keyword) => Token::Keyword(keyword),
				None => Token::Ident(word),
			};
			tokens.push(token);
			continue;
		}

		return_error!(tokenize_error(format!("unexpected character '{c}' at position {i}")));
	}

	Ok(tokens)
}

/// Reads a `quote`-delimited run starting at `start`; a doubled quote stands
/// for itself. Returns the text and the index after the closing quote.
fn quoted(chars: &[char], start: usize, quote: char) -> Result<(String, usize)> {
	let len = chars.len();
	let mut i = start + 1;
	let mut s = String::new();
	while i < len {
		if chars[i] == quote {
			if i + 1 < len && chars[i + 1] == quote {
				s.push(quote);
				i += 2;
			} else {
				return Ok((s, i + 1));
			}
		} else {
			s.push(chars[i]);
			i += 1;
		}
	}
	return_error!(tokenize_error(format!("unterminated literal starting at position {start}")))
}
