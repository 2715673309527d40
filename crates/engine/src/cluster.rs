// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	thread::{self, JoinHandle},
	time::Duration,
};

use mpcdb_catalog::Catalog;
use mpcdb_network::{Endpoint, Mesh, Rank, Transport};
use mpcdb_secret::ReferenceEngine;
use mpcdb_type::{
	diagnostic::{network::spawn_failed, protocol::session_closed},
	error,
};
use tracing::{debug, warn};

use crate::{Client, ClusterConfig, Party, Response, Result};

type PartyHandle = JoinHandle<(Result<()>, Catalog)>;

/// A client plus one thread per compute party, wired through an in-memory
/// mesh and running the reference engine.
///
/// Dropping the cluster tells the parties to exit if that has not happened
/// yet and waits for their threads.
pub struct Cluster {
	client: Option<Client<ReferenceEngine<Endpoint>, Endpoint>>,
	parties: Vec<PartyHandle>,
}

impl Cluster {
	pub fn start(config: ClusterConfig) -> Result<Self> {
		config.validate()?;

		let Mesh {
			client,
			parties: endpoints,
		} = Mesh::new(config.parties);

		let mut parties = Vec::with_capacity(endpoints.len());
		for endpoint in endpoints {
			let name = match endpoint.rank() {
				Rank::Party(id) => format!("mpcdb-party-{}", id),
				Rank::Client => "mpcdb-client".to_string(),
			};
			let seed = config.seed;
			let handle = thread::Builder::new()
				.name(name.clone())
				.spawn(move || {
					let engine = ReferenceEngine::new(endpoint.clone(), seed);
					let mut party = Party::new(engine, endpoint);
					let result = party.handle_requests();
					(result, party.into_catalog())
				})
				.map_err(|err| error!(spawn_failed(&name, &err.to_string())))?;
			parties.push(handle);
		}

		debug!(parties = config.parties, "cluster started");
		Ok(Self {
			client: Some(Client::new(ReferenceEngine::new(client.clone(), config.seed), client)),
			parties,
		})
	}

	pub fn execute(&mut self, input: &str) -> Response {
		match self.client.as_mut() {
			Some(client) => client.execute(input),
			None => Response {
				outputs: Vec::new(),
				error: Some(error!(session_closed())),
				elapsed: Duration::ZERO,
			},
		}
	}

	/// The client's view of the schema.
	pub fn catalog(&self) -> Option<&Catalog> {
		self.client.as_ref().map(Client::catalog)
	}

	pub fn is_closed(&self) -> bool {
		self.client.as_ref().is_none_or(Client::is_closed)
	}

	/// Stops every party and hands back their catalogs in rank order.
	pub fn shutdown(mut self) -> Vec<Catalog> {
		self.stop()
	}

	fn stop(&mut self) -> Vec<Catalog> {
		if let Some(mut client) = self.client.take() {
			if !client.is_closed() && !client.is_desynced() {
				let response = client.execute("exit");
				if let Some(err) = response.error {
					warn!(code = %err.code, "parties did not acknowledge exit");
				}
			}
		}

		let mut catalogs = Vec::with_capacity(self.parties.len());
		for handle in self.parties.drain(..) {
			match handle.join() {
				Ok((result, catalog)) => {
					if let Err(err) = result {
						warn!(code = %err.code, "party stopped with an error");
					}
					catalogs.push(catalog);
				}
				Err(_) => warn!("party thread panicked"),
			}
		}
		catalogs
	}
}

impl Drop for Cluster {
	fn drop(&mut self) {
		self.stop();
	}
}
