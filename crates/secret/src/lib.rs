// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Secret-shared values and the engine that computes on them.
//!
//! The rest of the workspace only talks to [`SecretEngine`]. Shares are
//! opaque outside this crate: the only way to see a plaintext is an explicit,
//! collective [`SecretEngine::reconstruct`] towards the client.
//!
//! [`ReferenceEngine`] shares integers additively modulo 2^width and bits by
//! XOR. Comparison, boolean and select operations open their operands among
//! the compute parties and re-share the result from a PRG stream every party
//! seeds identically. It keeps every party in lockstep exactly like a real
//! engine would, but it is not a secure protocol.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use engine::SecretEngine;
pub use reference::ReferenceEngine;
pub use value::{SecretBit, SecretValue};

mod engine;
mod frame;
mod reference;
pub mod test_utils;
mod value;

pub type Result<T> = std::result::Result<T, mpcdb_type::Error>;
