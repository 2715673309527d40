// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{panic, thread};

use mpcdb_network::{Endpoint, Mesh};

use crate::ReferenceEngine;

/// Runs `client` on the current thread and `party` once per compute party on
/// its own thread, all wired through a fresh in-memory mesh.
pub fn run<C, P, CR, PR>(parties: usize, seed: u64, client: C, party: P) -> (CR, Vec<PR>)
where
	C: FnOnce(&mut ReferenceEngine<Endpoint>) -> CR,
	P: Fn(&mut ReferenceEngine<Endpoint>) -> PR + Sync,
	PR: Send,
{
	let Mesh {
		client: client_endpoint,
		parties: endpoints,
	} = Mesh::new(parties);

	thread::scope(|scope| {
		let party = &party;
		let handles: Vec<_> = endpoints
			.into_iter()
			.map(|endpoint| {
				scope.spawn(move || {
					let mut engine = ReferenceEngine::new(endpoint, seed);
					party(&mut engine)
				})
			})
			.collect();

		let client_result = {
			let mut engine = ReferenceEngine::new(client_endpoint, seed);
			client(&mut engine)
		};

		let party_results = handles
			.into_iter()
			.map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
			.collect();

		(client_result, party_results)
	})
}
