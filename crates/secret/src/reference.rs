// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use mpcdb_network::{Rank, Transport};
use mpcdb_type::{
	FieldType,
	diagnostic::protocol::{frame_desync, malformed_message, not_a_party, operand_type_mismatch},
	return_error,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::instrument;

use crate::{
	Result, SecretBit, SecretEngine, SecretValue,
	frame::{Frame, Op},
};

/// Share arithmetic of one value domain.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Ring {
	Xor,
	Add(u64),
}

impl Ring {
	fn of(ty: FieldType) -> Self {
		if ty.is_bit() {
			Ring::Xor
		} else {
			Ring::Add(ty.mask())
		}
	}

	fn mask(&self) -> u64 {
		match self {
			Ring::Xor => 1,
			Ring::Add(mask) => *mask,
		}
	}

	fn combine(&self, left: u64, right: u64) -> u64 {
		match self {
			Ring::Xor => (left ^ right) & 1,
			Ring::Add(mask) => left.wrapping_add(right) & mask,
		}
	}

	/// The share that completes `masks` to `value`.
	fn complete(&self, value: u64, masks: &[u64]) -> u64 {
		match self {
			Ring::Xor => masks.iter().fold(value, |acc, m| acc ^ m) & 1,
			Ring::Add(mask) => masks.iter().fold(value, |acc, m| acc.wrapping_sub(*m)) & mask,
		}
	}
}

pub struct ReferenceEngine<T: Transport> {
	transport: T,
	// identical on every party; drawn in lockstep for re-sharing
	shared: ChaCha20Rng,
	// client only; masks for dealt shares
	dealer: ChaCha20Rng,
	sent: HashMap<Rank, u64>,
	received: HashMap<Rank, u64>,
}

impl<T: Transport> ReferenceEngine<T> {
	pub fn new(transport: T, seed: u64) -> Self {
		Self {
			transport,
			shared: ChaCha20Rng::seed_from_u64(seed),
			dealer: ChaCha20Rng::from_entropy(),
			sent: HashMap::new(),
			received: HashMap::new(),
		}
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	fn party_index(&self, op: Op) -> Result<usize> {
		match self.transport.rank() {
			Rank::Party(id) => Ok(id),
			Rank::Client => return_error!(not_a_party(&op.to_string())),
		}
	}

	fn send_frame(&mut self, to: Rank, op: Op, shares: Vec<u64>) -> Result<()> {
		let seq = self.sent.entry(to).or_insert(0);
		let frame = Frame {
			seq: *seq,
			op,
			shares,
		};
		*seq += 1;
		self.transport.send(to, frame.encode()?)
	}

	fn recv_frame(&mut self, from: Rank, op: Op, len: usize) -> Result<Vec<u64>> {
		let frame = Frame::decode(&self.transport.recv(from)?)?;
		let expected = self.received.entry(from).or_insert(0);
		if frame.seq != *expected || frame.op != op {
			return_error!(frame_desync(
				&format!("{} #{} from {}", op, expected, from),
				&format!("{} #{}", frame.op, frame.seq)
			));
		}
		*expected += 1;
		if frame.shares.len() != len {
			return_error!(malformed_message(format!(
				"{} frame from {} carries {} share(s), expected {}",
				op,
				from,
				frame.shares.len(),
				len
			)));
		}
		Ok(frame.shares)
	}

	/// Exchanges the given shares with every peer and returns the plaintexts.
	fn open(&mut self, op: Op, operands: &[(Ring, u64)]) -> Result<Vec<u64>> {
		self.party_index(op)?;
		let mine: Vec<u64> = operands.iter().map(|(_, share)| *share).collect();
		let peers = self.transport.peers();
		for peer in &peers {
			self.send_frame(*peer, op, mine.clone())?;
		}

		let mut opened = mine;
		for peer in &peers {
			let theirs = self.recv_frame(*peer, op, operands.len())?;
			for (slot, ((ring, _), share)) in opened.iter_mut().zip(operands.iter().zip(theirs)) {
				*slot = ring.combine(*slot, share);
			}
		}
		Ok(opened)
	}

	/// This party's share of a freshly re-shared `value`. Every party draws
	/// the same masks, so the stream must advance identically everywhere.
	fn reshare(&mut self, ring: Ring, value: u64) -> u64 {
		let parties = self.transport.parties();
		let masks: Vec<u64> = (0..parties - 1).map(|_| self.shared.next_u64() & ring.mask()).collect();
		match self.transport.rank() {
			Rank::Party(id) if id + 1 < parties => masks[id],
			_ => ring.complete(value & ring.mask(), &masks),
		}
	}
}

impl<T: Transport> SecretEngine for ReferenceEngine<T> {
	fn rank(&self) -> Rank {
		self.transport.rank()
	}

	#[instrument(name = "secret::share", level = "trace", skip(self, plaintext))]
	fn share(&mut self, ty: FieldType, plaintext: i64) -> Result<SecretValue> {
		let ring = Ring::of(ty);
		match self.transport.rank() {
			Rank::Client => {
				let parties = self.transport.parties();
				let masks: Vec<u64> =
					(0..parties - 1).map(|_| self.dealer.next_u64() & ring.mask()).collect();
				let last = ring.complete(plaintext as u64 & ring.mask(), &masks);
				for party in 0..parties {
					let share = masks.get(party).copied().unwrap_or(last);
					self.send_frame(Rank::Party(party), Op::Share, vec![share])?;
				}
				Ok(SecretValue {
					ty,
					share: 0,
				})
			}
			Rank::Party(_) => {
				let shares = self.recv_frame(Rank::Client, Op::Share, 1)?;
				Ok(SecretValue {
					ty,
					share: shares[0] & ring.mask(),
				})
			}
		}
	}

	#[instrument(name = "secret::reconstruct", level = "trace", skip(self, value))]
	fn reconstruct(&mut self, value: &SecretValue) -> Result<Option<i64>> {
		let ring = Ring::of(value.ty);
		match self.transport.rank() {
			Rank::Client => {
				let mut raw = 0u64;
				for party in 0..self.transport.parties() {
					let shares = self.recv_frame(Rank::Party(party), Op::Reconstruct, 1)?;
					raw = ring.combine(raw, shares[0]);
				}
				Ok(Some(value.ty.sign_extend(raw)))
			}
			Rank::Party(_) => {
				self.send_frame(Rank::Client, Op::Reconstruct, vec![value.share])?;
				Ok(None)
			}
		}
	}

	#[instrument(name = "secret::reconstruct_bit", level = "trace", skip(self, bit))]
	fn reconstruct_bit(&mut self, bit: &SecretBit) -> Result<Option<bool>> {
		let value = SecretValue {
			ty: FieldType::Bit,
			share: bit.share as u64,
		};
		Ok(self.reconstruct(&value)?.map(|raw| raw != 0))
	}

	fn constant_bit(&self, value: bool) -> SecretBit {
		SecretBit {
			share: value && self.transport.rank() == Rank::Party(0),
		}
	}

	fn not(&self, bit: &SecretBit) -> SecretBit {
		SecretBit {
			share: bit.share ^ (self.transport.rank() == Rank::Party(0)),
		}
	}

	fn and(&mut self, left: &SecretBit, right: &SecretBit) -> Result<SecretBit> {
		let opened = self.open(Op::And, &[(Ring::Xor, left.share as u64), (Ring::Xor, right.share as u64)])?;
		let result = (opened[0] & opened[1]) & 1;
		Ok(SecretBit {
			share: self.reshare(Ring::Xor, result) == 1,
		})
	}

	fn or(&mut self, left: &SecretBit, right: &SecretBit) -> Result<SecretBit> {
		let opened = self.open(Op::Or, &[(Ring::Xor, left.share as u64), (Ring::Xor, right.share as u64)])?;
		let result = (opened[0] | opened[1]) & 1;
		Ok(SecretBit {
			share: self.reshare(Ring::Xor, result) == 1,
		})
	}

	fn less_than(&mut self, left: &SecretValue, right: &SecretValue) -> Result<SecretBit> {
		if left.ty != right.ty {
			return_error!(operand_type_mismatch(
				&Op::LessThan.to_string(),
				&left.ty.to_string(),
				&right.ty.to_string()
			));
		}
		let ring = Ring::of(left.ty);
		let opened = self.open(Op::LessThan, &[(ring, left.share), (ring, right.share)])?;
		let result = left.ty.sign_extend(opened[0]) < left.ty.sign_extend(opened[1]);
		Ok(SecretBit {
			share: self.reshare(Ring::Xor, result as u64) == 1,
		})
	}

	fn select(&mut self, condition: &SecretBit, if_true: &SecretValue, if_false: &SecretValue) -> Result<SecretValue> {
		if if_true.ty != if_false.ty {
			return_error!(operand_type_mismatch(
				&Op::Select.to_string(),
				&if_true.ty.to_string(),
				&if_false.ty.to_string()
			));
		}
		let ring = Ring::of(if_true.ty);
		let opened = self.open(
			Op::Select,
			&[(Ring::Xor, condition.share as u64), (ring, if_true.share), (ring, if_false.share)],
		)?;
		let result = if opened[0] == 1 {
			opened[1]
		} else {
			opened[2]
		};
		Ok(SecretValue {
			ty: if_true.ty,
			share: self.reshare(ring, result),
		})
	}

	fn select_bit(&mut self, condition: &SecretBit, if_true: &SecretBit, if_false: &SecretBit) -> Result<SecretBit> {
		let opened = self.open(
			Op::Select,
			&[
				(Ring::Xor, condition.share as u64),
				(Ring::Xor, if_true.share as u64),
				(Ring::Xor, if_false.share as u64),
			],
		)?;
		let result = if opened[0] == 1 {
			opened[1]
		} else {
			opened[2]
		};
		Ok(SecretBit {
			share: self.reshare(Ring::Xor, result) == 1,
		})
	}
}
