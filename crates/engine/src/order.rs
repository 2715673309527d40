// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Data-oblivious ORDER BY.
//!
//! Rows are sorted with a bitonic network: the sequence of compare-exchange
//! positions depends only on the row count, never on the data. Each exchange
//! computes a secret "must swap" bit and rewires both rows through
//! multiplexers, so the parties learn nothing about the relative order of the
//! values they hold shares of.

use mpcdb_catalog::{Record, Snapshot};
use mpcdb_secret::{SecretBit, SecretEngine};
use mpcdb_type::{
	diagnostic::query::{empty_order_keys, order_column_not_found},
	return_error,
};
use tracing::{instrument, trace};

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
	Asc,
	Desc,
}

impl SortDirection {
	pub fn from_ascending(ascending: bool) -> Self {
		if ascending { SortDirection::Asc } else { SortDirection::Desc }
	}

	pub fn is_ascending(&self) -> bool {
		*self == SortDirection::Asc
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
	pub column: String,
	pub direction: SortDirection,
}

impl SortKey {
	pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			column: column.into(),
			direction,
		}
	}
}

/// Sorts `rows` in place by `keys`, the first key taking precedence.
///
/// Collective: every party must call this with the same row count and keys.
/// The row set is padded up to the next power of two with publicly flagged
/// copies of the first row whose `valid` tag is a shared `false`; the padding
/// is removed again before returning.
#[instrument(name = "engine::order::sort", level = "debug", skip(engine, rows), fields(rows = rows.len()))]
pub fn sort<E: SecretEngine>(engine: &mut E, rows: &mut Vec<Snapshot>, keys: &[SortKey]) -> Result<()> {
	if keys.is_empty() {
		return_error!(empty_order_keys());
	}

	let Some(first) = rows.first() else {
		return Ok(());
	};

	let mut columns = Vec::with_capacity(keys.len());
	for key in keys {
		let Some(idx) = first.index_of(&key.column) else {
			return_error!(order_column_not_found(&key.column));
		};
		columns.push(idx);
	}

	let len = rows.len();
	if len == 1 {
		return Ok(());
	}

	let ascending: Vec<SecretBit> = keys.iter().map(|key| engine.constant_bit(key.direction.is_ascending())).collect();

	let padded = len.next_power_of_two();
	if padded > len {
		let padding = first.padding_copy(engine.constant_bit(false));
		rows.resize(padded, padding);
	}

	let mut exchanges = 0usize;
	let mut k = 2;
	while k <= padded {
		let mut j = k / 2;
		while j > 0 {
			for i in 0..padded {
				let partner = i ^ j;
				if partner > i {
					let up = i & k == 0;
					compare_exchange(engine, rows, i, partner, up, &columns, &ascending)?;
					exchanges += 1;
				}
			}
			j /= 2;
		}
		k *= 2;
	}

	rows.truncate(len);
	trace!(exchanges, padded, "sorted");
	Ok(())
}

/// Orders the pair at `(i, partner)` so that the smaller row comes first when
/// `up` holds and last otherwise. Padding rows compare as larger than every
/// real row and are moved by a public swap.
fn compare_exchange<E: SecretEngine>(
	engine: &mut E,
	rows: &mut [Snapshot],
	i: usize,
	partner: usize,
	up: bool,
	columns: &[usize],
	ascending: &[SecretBit],
) -> Result<()> {
	match (rows[i].is_padding(), rows[partner].is_padding()) {
		(true, true) => Ok(()),
		(true, false) => {
			if up {
				rows.swap(i, partner);
			}
			Ok(())
		}
		(false, true) => {
			if !up {
				rows.swap(i, partner);
			}
			Ok(())
		}
		(false, false) => {
			let swap = requires_swap(engine, &rows[i], &rows[partner], columns, ascending)?;
			let swap = if up { swap } else { engine.not(&swap) };
			oblivious_swap(engine, rows, i, partner, &swap)
		}
	}
}

/// Secret bit telling whether `left` must move after `right` for an ascending
/// exchange.
///
/// Per key, `obey` is `left > right` for ascending keys and `left < right`
/// for descending ones. Folding from the last key towards the first with
/// `acc = (acc & eq) | obey` lets an earlier key decide unless it ties.
pub(crate) fn requires_swap<E: SecretEngine>(
	engine: &mut E,
	left: &Snapshot,
	right: &Snapshot,
	columns: &[usize],
	ascending: &[SecretBit],
) -> Result<SecretBit> {
	let mut acc: Option<SecretBit> = None;

	for (&idx, asc) in columns.iter().zip(ascending).rev() {
		let a = &left.values()[idx];
		let b = &right.values()[idx];

		let lt = engine.less_than(a, b)?;
		let gt = engine.less_than(b, a)?;

		let descending = engine.not(asc);
		let obey_asc = engine.and(asc, &gt)?;
		let obey_desc = engine.and(&descending, &lt)?;
		let obey = engine.or(&obey_asc, &obey_desc)?;

		acc = Some(match acc {
			None => obey,
			Some(previous) => {
				let not_lt = engine.not(&lt);
				let not_gt = engine.not(&gt);
				let eq = engine.and(&not_lt, &not_gt)?;
				let tie = engine.and(&previous, &eq)?;
				engine.or(&tie, &obey)?
			}
		});
	}

	match acc {
		Some(bit) => Ok(bit),
		None => return_error!(empty_order_keys()),
	}
}

/// Exchanges every field and the `valid` tag of two rows under a secret
/// condition. Both rows are rewritten whether or not the swap happens.
fn oblivious_swap<E: SecretEngine>(
	engine: &mut E,
	rows: &mut [Snapshot],
	i: usize,
	partner: usize,
	swap: &SecretBit,
) -> Result<()> {
	debug_assert!(i < partner);
	let (head, tail) = rows.split_at_mut(partner);
	let left = &mut head[i];
	let right = &mut tail[0];

	for idx in 0..left.len() {
		let a = left.values()[idx];
		let b = right.values()[idx];
		let first = engine.select(swap, &b, &a)?;
		let second = engine.select(swap, &a, &b)?;
		left.values_mut()[idx] = first;
		right.values_mut()[idx] = second;
	}

	let a = *left.valid();
	let b = *right.valid();
	let first = engine.select_bit(swap, &b, &a)?;
	let second = engine.select_bit(swap, &a, &b)?;
	left.set_valid(first);
	right.set_valid(second);
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use mpcdb_catalog::{Record, Snapshot};
	use mpcdb_secret::{SecretBit, SecretEngine, SecretValue, test_utils::run};
	use mpcdb_type::FieldType;
	use rand::{Rng, SeedableRng, rngs::StdRng};

	use super::{SortDirection, SortKey, sort};

	fn column(idx: usize) -> String {
		format!("c{}", idx)
	}

	/// Shares `rows`, sorts them on every party and reveals the result in
	/// order. Also checks that every revealed row kept a true `valid` tag.
	fn sort_shared(parties: usize, types: &[FieldType], rows: &[Vec<i64>], keys: &[SortKey]) -> Vec<Vec<i64>> {
		let (revealed, _) = run(
			parties,
			42,
			|engine| {
				for row in rows {
					for (value, ty) in row.iter().zip(types) {
						engine.share(*ty, *value).unwrap();
					}
				}
				let mut revealed = Vec::new();
				for _ in rows {
					let row: Vec<i64> = types
						.iter()
						.map(|ty| engine.reconstruct(&SecretValue::zero(*ty)).unwrap().unwrap())
						.collect();
					assert_eq!(engine.reconstruct_bit(&SecretBit::zero()).unwrap(), Some(true));
					revealed.push(row);
				}
				revealed
			},
			|engine| {
				let mut snapshots = Vec::new();
				for _ in rows {
					let mut snapshot = Snapshot::new(engine.constant_bit(true));
					for (idx, ty) in types.iter().enumerate() {
						let value = engine.share(*ty, 0).unwrap();
						snapshot.add_field(&column(idx), value).unwrap();
					}
					snapshots.push(snapshot);
				}

				sort(engine, &mut snapshots, keys).unwrap();
				assert_eq!(snapshots.len(), rows.len());
				assert!(snapshots.iter().all(|snapshot| !snapshot.is_padding()));

				for snapshot in &snapshots {
					for value in snapshot.values() {
						engine.reconstruct(value).unwrap();
					}
					engine.reconstruct_bit(snapshot.valid()).unwrap();
				}
			},
		);
		revealed
	}

	fn compare(left: &[i64], right: &[i64], keys: &[(usize, SortDirection)]) -> Ordering {
		for (idx, direction) in keys {
			let ordering = match direction {
				SortDirection::Asc => left[*idx].cmp(&right[*idx]),
				SortDirection::Desc => right[*idx].cmp(&left[*idx]),
			};
			if ordering != Ordering::Equal {
				return ordering;
			}
		}
		Ordering::Equal
	}

	fn keys(by: &[(usize, SortDirection)]) -> Vec<SortKey> {
		by.iter().map(|(idx, direction)| SortKey::new(column(*idx), *direction)).collect()
	}

	fn assert_sorted(types: &[FieldType], rows: Vec<Vec<i64>>, by: &[(usize, SortDirection)]) {
		let actual = sort_shared(2, types, &rows, &keys(by));

		for pair in actual.windows(2) {
			assert_ne!(compare(&pair[0], &pair[1], by), Ordering::Greater, "out of order: {:?}", actual);
		}

		let mut expected = rows;
		expected.sort();
		let mut permuted = actual;
		permuted.sort();
		assert_eq!(permuted, expected, "rows were not permuted");
	}

	#[test]
	fn test_order_by_single_key() {
		let rows = vec![vec![1, 2], vec![3, 1]];
		let sorted = sort_shared(2, &[FieldType::Int32, FieldType::Int32], &rows, &keys(&[(1, SortDirection::Asc)]));
		assert_eq!(sorted, vec![vec![3, 1], vec![1, 2]]);
	}

	#[test]
	fn test_order_descending_three_parties() {
		let rows = vec![vec![5], vec![-7], vec![12], vec![0]];
		let sorted = sort_shared(3, &[FieldType::Int16], &rows, &keys(&[(0, SortDirection::Desc)]));
		assert_eq!(sorted, vec![vec![12], vec![5], vec![0], vec![-7]]);
	}

	#[test]
	fn test_first_key_dominates() {
		let rows = vec![vec![1, 5], vec![0, 9], vec![1, 1], vec![0, 2]];
		let sorted = sort_shared(
			2,
			&[FieldType::Int8, FieldType::Int8],
			&rows,
			&keys(&[(0, SortDirection::Asc), (1, SortDirection::Desc)]),
		);
		assert_eq!(sorted, vec![vec![0, 9], vec![0, 2], vec![1, 5], vec![1, 1]]);
	}

	#[test]
	fn test_padding_is_removed() {
		let rows = vec![vec![3], vec![1], vec![2]];
		let sorted = sort_shared(2, &[FieldType::Int64], &rows, &keys(&[(0, SortDirection::Asc)]));
		assert_eq!(sorted, vec![vec![1], vec![2], vec![3]]);
	}

	#[test]
	fn test_single_row_untouched() {
		let rows = vec![vec![-1, 1]];
		let sorted = sort_shared(2, &[FieldType::Int8, FieldType::Bit], &rows, &keys(&[(1, SortDirection::Desc)]));
		assert_eq!(sorted, rows);
	}

	#[test]
	fn test_already_sorted_input() {
		let rows = vec![vec![-3], vec![-1], vec![4], vec![9], vec![10]];
		let sorted = sort_shared(2, &[FieldType::Int32], &rows, &keys(&[(0, SortDirection::Asc)]));
		assert_eq!(sorted, rows);
	}

	#[test]
	fn test_random_rows_match_lexicographic_order() {
		let mut rng = StdRng::seed_from_u64(7);
		let types = [FieldType::Int8, FieldType::Bit, FieldType::Int32];

		for len in [2usize, 5, 8, 9] {
			let rows: Vec<Vec<i64>> = (0..len)
				.map(|_| vec![rng.gen_range(-3..=3), rng.gen_range(0..=1), rng.gen_range(-1000..=1000)])
				.collect();
			assert_sorted(&types, rows.clone(), &[(0, SortDirection::Asc), (1, SortDirection::Desc)]);
			assert_sorted(&types, rows, &[(1, SortDirection::Asc), (2, SortDirection::Desc), (0, SortDirection::Asc)]);
		}
	}

	#[test]
	fn test_sort_rejects_bad_keys() {
		let (_, errors) = run(
			2,
			1,
			|_| {},
			|engine| {
				let mut snapshot = Snapshot::new(SecretBit::zero());
				snapshot.add_field("a", SecretValue::zero(FieldType::Int8)).unwrap();
				let mut rows = vec![snapshot.clone(), snapshot];

				let empty = sort(engine, &mut rows, &[]).unwrap_err();
				let unknown = sort(engine, &mut rows, &[SortKey::new("b", SortDirection::Asc)]).unwrap_err();
				(empty.code.clone(), unknown.code.clone())
			},
		);
		for (empty, unknown) in errors {
			assert_eq!(empty, "QUERY_003");
			assert_eq!(unknown, "QUERY_001");
		}
	}

	#[test]
	fn test_sort_empty_rows() {
		let (_, lengths) = run(
			2,
			1,
			|_| {},
			|engine| {
				let mut rows = Vec::new();
				sort(engine, &mut rows, &[SortKey::new("a", SortDirection::Asc)]).unwrap();
				rows.len()
			},
		);
		assert_eq!(lengths, vec![0, 0]);
	}
}
