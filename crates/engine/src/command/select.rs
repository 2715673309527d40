// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_catalog::{Record, RevealedRow, Snapshot};
use mpcdb_network::{Rank, Transport};
use mpcdb_secret::{SecretBit, SecretEngine, SecretValue};
use mpcdb_sql::ast::{SelectItem, SelectStatement};
use mpcdb_type::{
	FieldType,
	diagnostic::{
		catalog::{column_not_found, table_not_found},
		protocol::malformed_message,
		sql::unsupported,
	},
	return_error,
};
use tracing::{debug, instrument};

use crate::{Frame, Message, Reply, Result, SortDirection, SortKey, order, session::Session};

impl<E: SecretEngine, T: Transport> Session<E, T> {
	/// Learns the row count from party 0, then reconstructs every projected
	/// field and the `valid` tag of each row. Rows whose tag is false are
	/// dropped.
	#[instrument(name = "engine::table::select", level = "debug", skip(self, statement), fields(table = %statement.from))]
	pub(crate) fn select(&mut self, statement: SelectStatement) -> Result<Frame> {
		let database = self.catalog.current()?;
		let Some(table) = database.table(&statement.from) else {
			return_error!(table_not_found(&statement.from));
		};
		let schema = table.schema().clone();

		let mut columns: Vec<String> = Vec::new();
		for item in &statement.items {
			match item {
				SelectItem::Wildcard => columns.extend(schema.fields.iter().cloned()),
				SelectItem::Expr(expr) => match expr.column_name() {
					Some(name) if schema.index_of(name).is_some() => columns.push(name.to_string()),
					Some(name) => return_error!(column_not_found(&schema.name, name)),
					None => return_error!(unsupported("select expression other than a column")),
				},
			}
		}

		let mut order_fields = Vec::with_capacity(statement.order_by.len());
		let mut ascendings = Vec::with_capacity(statement.order_by.len());
		for item in &statement.order_by {
			match item.expr.column_name() {
				Some(name) if schema.index_of(name).is_some() => {
					order_fields.push(name.to_string());
					ascendings.push(item.asc);
				}
				Some(name) => return_error!(column_not_found(&schema.name, name)),
				None => return_error!(unsupported("ORDER BY expression other than a column")),
			}
		}

		let types: Vec<FieldType> =
			columns.iter().filter_map(|name| schema.index_of(name).and_then(|idx| schema.type_of(idx))).collect();

		let ordered = !order_fields.is_empty();
		self.broadcast(&Message::Select {
			name: schema.name.clone(),
			field_names: columns.clone(),
			order_fields: ordered.then_some(order_fields),
			ascendings: ordered.then_some(ascendings),
		})?;

		let count = match self.recv_reply(0)? {
			Reply::RowCount {
				rows,
			} => rows,
			other => return_error!(malformed_message(format!("expected a row count from party 0, got {:?}", other))),
		};

		let mut rows = Vec::new();
		for _ in 0..count {
			let mut values = Vec::with_capacity(types.len());
			for ty in &types {
				values.push(self.engine.reconstruct(&SecretValue::zero(*ty))?.unwrap_or_default());
			}
			if self.engine.reconstruct_bit(&SecretBit::zero())?.unwrap_or_default() {
				rows.push(RevealedRow::new(values));
			}
		}
		self.collect_acks()?;

		debug!(announced = count, revealed = rows.len(), "select finished");
		Ok(Frame {
			columns,
			rows,
		})
	}

	/// The party half of a select. Party 0 always announces a row count, even
	/// when the select fails before anything could be revealed.
	pub(crate) fn apply_select(
		&mut self,
		name: &str,
		field_names: &[String],
		order_fields: Option<&[String]>,
		ascendings: Option<&[bool]>,
	) -> Result<()> {
		let prepared = self.prepare_select(name, field_names, order_fields, ascendings);
		let announce = self.transport.rank() == Rank::Party(0);

		let (rows, projection) = match prepared {
			Ok(prepared) => prepared,
			Err(err) => {
				if announce {
					self.reply(&Reply::RowCount {
						rows: 0,
					})?;
				}
				return Err(err);
			}
		};

		if announce {
			self.reply(&Reply::RowCount {
				rows: rows.len() as u64,
			})?;
		}

		for row in &rows {
			for idx in &projection {
				self.engine.reconstruct(&row.values()[*idx])?;
			}
			self.engine.reconstruct_bit(row.valid())?;
		}
		Ok(())
	}

	fn prepare_select(
		&mut self,
		name: &str,
		field_names: &[String],
		order_fields: Option<&[String]>,
		ascendings: Option<&[bool]>,
	) -> Result<(Vec<Snapshot>, Vec<usize>)> {
		let Some(table) = self.catalog.current()?.table(name) else {
			return_error!(table_not_found(name));
		};

		let mut projection = Vec::with_capacity(field_names.len());
		for field in field_names {
			let Some(idx) = table.schema().index_of(field) else {
				return_error!(column_not_found(name, field));
			};
			projection.push(idx);
		}

		let mut rows = table.select_all(self.engine.constant_bit(true));

		if let Some(order_fields) = order_fields {
			let ascendings = ascendings.unwrap_or_default();
			if ascendings.len() != order_fields.len() {
				return_error!(malformed_message(format!(
					"select lists {} order fields but {} directions",
					order_fields.len(),
					ascendings.len()
				)));
			}
			let keys: Vec<SortKey> = order_fields
				.iter()
				.zip(ascendings)
				.map(|(column, ascending)| SortKey::new(column.clone(), SortDirection::from_ascending(*ascending)))
				.collect();
			order::sort(&mut self.engine, &mut rows, &keys)?;
		}

		Ok((rows, projection))
	}
}
