// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! End-to-end test support: start an in-process cluster, drive it from a
//! transcript and compare what the client prints.

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::sync::Once;

use mpcdb_engine::{Cluster, ClusterConfig};
use tracing_subscriber::EnvFilter;

pub mod script;

pub use script::{Script, Step};

/// Seed used by every cluster started through this crate.
pub const TEST_SEED: u64 = 0x5eed;

/// Routes engine logs to the test harness. The level comes from `MPCDB_LOG`
/// and defaults to `warn`.
pub fn init_logging() {
	static INIT: Once = Once::new();
	INIT.call_once(|| {
		let filter = EnvFilter::try_from_env("MPCDB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
		let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
	});
}

pub fn cluster(parties: usize) -> Cluster {
	init_logging();
	Cluster::start(ClusterConfig::new().parties(parties).seed(TEST_SEED)).unwrap()
}
