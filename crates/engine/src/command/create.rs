// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use mpcdb_catalog::TableToCreate;
use mpcdb_network::Transport;
use mpcdb_secret::SecretEngine;
use mpcdb_sql::ast::{ColumnDef, CreateTableStatement};
use mpcdb_type::{
	FieldType,
	diagnostic::{
		catalog::{table_already_exists, unsupported_column_type},
		protocol::malformed_message,
	},
	error, return_error,
};
use tracing::instrument;

use crate::{Message, Result, session::Session};

impl<E: SecretEngine, T: Transport> Session<E, T> {
	#[instrument(name = "engine::table::create", level = "debug", skip(self, statement), fields(table = %statement.name))]
	pub(crate) fn create_table(&mut self, statement: CreateTableStatement) -> Result<String> {
		let database = self.catalog.current_mut()?;
		if database.table(&statement.name).is_some() {
			return_error!(table_already_exists(&statement.name));
		}

		let fields = statement
			.columns
			.iter()
			.map(|column| Ok((column.name.clone(), field_type(column)?)))
			.collect::<Result<Vec<_>>>()?;

		let message = Message::CreateTable {
			name: statement.name.clone(),
			field_names: fields.iter().map(|(name, _)| name.clone()).collect(),
			field_types: fields.iter().map(|(_, ty)| ty.width()).collect(),
		};

		database.create_table(TableToCreate {
			name: statement.name.clone(),
			fields,
		})?;

		self.broadcast(&message)?;
		self.collect_acks()?;
		Ok(format!("Table `{}` created.", statement.name))
	}

	pub(crate) fn apply_create_table(&mut self, name: &str, field_names: &[String], field_types: &[u32]) -> Result<()> {
		if field_names.len() != field_types.len() {
			return_error!(malformed_message(format!(
				"table `{}` lists {} field names but {} field types",
				name,
				field_names.len(),
				field_types.len()
			)));
		}

		let fields = field_names
			.iter()
			.zip(field_types)
			.map(|(field, width)| match FieldType::from_width(*width) {
				Some(ty) => Ok((field.clone(), ty)),
				None => Err(error!(malformed_message(format!("field `{}` has unknown width {}", field, width)))),
			})
			.collect::<Result<Vec<_>>>()?;

		self.catalog.current_mut()?.create_table(TableToCreate {
			name: name.to_string(),
			fields,
		})?;
		Ok(())
	}
}

/// Maps a declared SQL column type onto a [`FieldType`]. `INT(n)` selects
/// the width explicitly; `n` must be 8, 16, 32 or 64.
pub(crate) fn field_type(column: &ColumnDef) -> Result<FieldType> {
	let name = &column.ty.name;
	let resolved = match column.ty.argument {
		None => FieldType::from_sql_name(name),
		Some(width) if name.eq_ignore_ascii_case("int") || name.eq_ignore_ascii_case("integer") => {
			u32::try_from(width).ok().and_then(FieldType::from_width).filter(|ty| !ty.is_bit())
		}
		Some(_) => None,
	};

	resolved.ok_or_else(|| {
		let declared = match column.ty.argument {
			Some(argument) => format!("{}({})", name, argument),
			None => name.clone(),
		};
		error!(unsupported_column_type(&column.name, &declared))
	})
}

#[cfg(test)]
mod tests {
	use mpcdb_sql::ast::{ColumnDef, SqlType};
	use mpcdb_type::FieldType;

	use super::field_type;

	fn column(ty: &str, argument: Option<u64>) -> ColumnDef {
		ColumnDef {
			name: "c".into(),
			ty: SqlType {
				name: ty.into(),
				argument,
			},
		}
	}

	#[test]
	fn test_named_types() {
		assert_eq!(field_type(&column("boolean", None)).unwrap(), FieldType::Bit);
		assert_eq!(field_type(&column("TINYINT", None)).unwrap(), FieldType::Int8);
		assert_eq!(field_type(&column("smallint", None)).unwrap(), FieldType::Int16);
		assert_eq!(field_type(&column("INT", None)).unwrap(), FieldType::Int32);
		assert_eq!(field_type(&column("bigint", None)).unwrap(), FieldType::Int64);
	}

	#[test]
	fn test_explicit_widths() {
		assert_eq!(field_type(&column("int", Some(8))).unwrap(), FieldType::Int8);
		assert_eq!(field_type(&column("INTEGER", Some(64))).unwrap(), FieldType::Int64);
	}

	#[test]
	fn test_unsupported_types() {
		for (ty, argument) in [("int", Some(1)), ("int", Some(12)), ("varchar", Some(20)), ("float", None), ("bigint", Some(64))]
		{
			let err = field_type(&column(ty, argument)).unwrap_err();
			assert_eq!(err.code, "CA_008", "{} {:?}", ty, argument);
		}
		let err = field_type(&column("varchar", Some(20))).unwrap_err();
		assert_eq!(err.message, "Unsupported data type `varchar(20)` for field `c`.");
	}
}
