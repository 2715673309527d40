// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! One file per command. Each command has a client half, which validates and
//! drives the exchange, and an `apply_` half run by every compute party.

mod create;
mod database;
mod drop;
mod insert;
mod select;
