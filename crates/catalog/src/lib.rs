// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use catalog::Catalog;
pub use database::{Database, TableToCreate};
pub use record::{Record, RevealedRow, Row, Snapshot};
pub use schema::Schema;
pub use table::Table;

mod catalog;
mod database;
mod record;
mod schema;
mod table;
pub mod test_utils;

pub type Result<T> = std::result::Result<T, mpcdb_type::Error>;
