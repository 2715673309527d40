// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The command layer shared by the mpcdb client and the compute parties.
//!
//! The [`Client`] parses user input, validates it against its own catalog and
//! drives each command through the cluster. Every compute party runs a
//! [`Party`] whose request loop applies the same command to its catalog and
//! answers with an acknowledgement. Data only ever moves between processes as
//! shares produced by a [`SecretEngine`](mpcdb_secret::SecretEngine).

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use client::Client;
pub use cluster::Cluster;
pub use config::ClusterConfig;
pub use intent::Intent;
pub use order::{SortDirection, SortKey, sort};
pub use party::Party;
pub use protocol::{Message, Reply};
pub use response::{Frame, Output, Response};

mod client;
mod cluster;
mod command;
mod config;
mod intent;
pub mod order;
mod party;
mod protocol;
mod response;
mod session;

pub type Result<T> = std::result::Result<T, mpcdb_type::Error>;
