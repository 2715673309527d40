// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The SQL subset understood by mpcdb: `CREATE TABLE`, `DROP TABLE`,
//! `INSERT INTO ... VALUES` and `SELECT ... FROM ... [ORDER BY ...]`.
//! Several statements may be separated by `;`.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod ast;
mod parse;
pub mod token;

pub use parse::parse;

pub type Result<T> = std::result::Result<T, mpcdb_type::Error>;
