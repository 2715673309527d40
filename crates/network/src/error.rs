// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_type::diagnostic::network::{peer_disconnected, unknown_rank};

use crate::Rank;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
	#[error("channel to {peer} is closed")]
	Disconnected {
		peer: Rank,
	},

	#[error("no channel to {rank}")]
	UnknownRank {
		rank: Rank,
	},
}

impl From<TransportError> for mpcdb_type::Error {
	fn from(err: TransportError) -> Self {
		match err {
			TransportError::Disconnected {
				peer,
			} => mpcdb_type::error!(peer_disconnected(&peer.to_string())),
			TransportError::UnknownRank {
				rank,
			} => mpcdb_type::error!(unknown_rank(&rank.to_string())),
		}
	}
}
