// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Point-to-point transport between the client and the compute parties.
//!
//! Every process owns one [`Transport`] addressed by [`Rank`]. Messages between
//! any ordered pair of ranks are delivered in FIFO order; `send`/`recv` calls
//! must be issued in matching pairs by both sides.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::TransportError;
pub use mesh::{Endpoint, Mesh};
pub use rank::Rank;
pub use transport::Transport;

mod error;
mod mesh;
mod rank;
mod transport;

pub type Result<T> = std::result::Result<T, mpcdb_type::Error>;
