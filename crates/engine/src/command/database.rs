// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_network::Transport;
use mpcdb_secret::SecretEngine;
use tracing::instrument;

use crate::{Message, Result, session::Session};

impl<E: SecretEngine, T: Transport> Session<E, T> {
	#[instrument(name = "engine::database::create", level = "debug", skip(self))]
	pub(crate) fn create_database(&mut self, name: &str) -> Result<String> {
		self.catalog.create_database(name)?;
		self.broadcast(&Message::CreateDatabase {
			name: name.to_string(),
		})?;
		self.collect_acks()?;
		Ok(format!("Database `{}` created.", name))
	}

	#[instrument(name = "engine::database::drop", level = "debug", skip(self))]
	pub(crate) fn drop_database(&mut self, name: &str) -> Result<String> {
		self.catalog.drop_database(name)?;
		self.broadcast(&Message::DropDatabase {
			name: name.to_string(),
		})?;
		self.collect_acks()?;
		Ok(format!("Database `{}` dropped.", name))
	}

	#[instrument(name = "engine::database::use", level = "debug", skip(self))]
	pub(crate) fn use_database(&mut self, name: &str) -> Result<String> {
		self.catalog.use_database(name)?;
		self.broadcast(&Message::UseDatabase {
			name: name.to_string(),
		})?;
		self.collect_acks()?;
		Ok(format!("Database `{}` selected.", name))
	}

	pub(crate) fn apply_create_database(&mut self, name: &str) -> Result<()> {
		self.catalog.create_database(name)
	}

	pub(crate) fn apply_drop_database(&mut self, name: &str) -> Result<()> {
		self.catalog.drop_database(name)
	}

	pub(crate) fn apply_use_database(&mut self, name: &str) -> Result<()> {
		self.catalog.use_database(name)
	}
}
