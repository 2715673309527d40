// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::Result;

/// A command the client broadcasts to every compute party.
///
/// Messages carry names and layout only. Values travel separately as shares,
/// interleaved on the same channels in the order both sides agree on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Message {
	CreateDatabase {
		name: String,
	},
	DropDatabase {
		name: String,
	},
	UseDatabase {
		name: String,
	},
	CreateTable {
		name: String,
		field_names: Vec<String>,
		/// Bit widths: 1 for a bit, otherwise 8, 16, 32 or 64.
		field_types: Vec<u32>,
	},
	DropTable {
		name: String,
	},
	/// Followed by one share per schema column, in schema order.
	Insert {
		name: String,
	},
	Select {
		name: String,
		field_names: Vec<String>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		order_fields: Option<Vec<String>>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		ascendings: Option<Vec<bool>>,
	},
	Exit,
}

/// What a compute party sends back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Reply {
	Ack {
		error: Option<String>,
	},
	/// Sent by party 0 only, ahead of the revealed rows of a select.
	RowCount {
		rows: u64,
	},
}

impl Message {
	pub fn encode(&self) -> Result<Vec<u8>> {
		Ok(serde_json::to_vec(self)?)
	}

	pub fn decode(bytes: &[u8]) -> Result<Self> {
		Ok(serde_json::from_slice(bytes)?)
	}

	pub fn kind(&self) -> &'static str {
		match self {
			Message::CreateDatabase { .. } => "create-database",
			Message::DropDatabase { .. } => "drop-database",
			Message::UseDatabase { .. } => "use-database",
			Message::CreateTable { .. } => "create-table",
			Message::DropTable { .. } => "drop-table",
			Message::Insert { .. } => "insert",
			Message::Select { .. } => "select",
			Message::Exit => "exit",
		}
	}
}

impl Reply {
	pub fn encode(&self) -> Result<Vec<u8>> {
		Ok(serde_json::to_vec(self)?)
	}

	pub fn decode(bytes: &[u8]) -> Result<Self> {
		Ok(serde_json::from_slice(bytes)?)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::{Message, Reply};

	#[test]
	fn test_message_wire_shape() {
		let message = Message::CreateTable {
			name: "t".into(),
			field_names: vec!["a".into(), "b".into()],
			field_types: vec![32, 1],
		};
		let value: serde_json::Value = serde_json::from_slice(&message.encode().unwrap()).unwrap();
		assert_eq!(
			value,
			json!({"type": "create-table", "name": "t", "fieldNames": ["a", "b"], "fieldTypes": [32, 1]})
		);
	}

	#[test]
	fn test_select_without_order_omits_fields() {
		let message = Message::Select {
			name: "t".into(),
			field_names: vec!["a".into()],
			order_fields: None,
			ascendings: None,
		};
		let value: serde_json::Value = serde_json::from_slice(&message.encode().unwrap()).unwrap();
		assert_eq!(value, json!({"type": "select", "name": "t", "fieldNames": ["a"]}));

		let decoded = Message::decode(br#"{"type":"select","name":"t","fieldNames":["a"]}"#).unwrap();
		assert_eq!(decoded, message);
	}

	#[test]
	fn test_select_order_keys_camel_case() {
		let message = Message::Select {
			name: "t".into(),
			field_names: vec!["a".into(), "b".into()],
			order_fields: Some(vec!["b".into()]),
			ascendings: Some(vec![false]),
		};
		let value: serde_json::Value = serde_json::from_slice(&message.encode().unwrap()).unwrap();
		assert_eq!(
			value,
			json!({
				"type": "select",
				"name": "t",
				"fieldNames": ["a", "b"],
				"orderFields": ["b"],
				"ascendings": [false],
			})
		);
		assert!(Message::decode(br#"{"type":"select","name":"t","field_names":["a"]}"#).is_err());
	}

	#[test]
	fn test_exit_and_kind() {
		assert_eq!(Message::decode(br#"{"type":"exit"}"#).unwrap(), Message::Exit);
		assert_eq!(Message::Exit.kind(), "exit");
		assert_eq!(
			Message::Insert {
				name: "t".into()
			}
			.kind(),
			"insert"
		);
	}

	#[test]
	fn test_reply_wire_shape() {
		let ack = Reply::Ack {
			error: None,
		};
		assert_eq!(ack.encode().unwrap(), br#"{"type":"ack","error":null}"#.to_vec());
		assert_eq!(
			Reply::decode(br#"{"type":"row-count","rows":3}"#).unwrap(),
			Reply::RowCount {
				rows: 3
			}
		);
	}

	#[test]
	fn test_malformed_message() {
		assert_eq!(Message::decode(b"not json").unwrap_err().code, "PROTOCOL_004");
		assert_eq!(Message::decode(br#"{"type":"vacuum"}"#).unwrap_err().code, "PROTOCOL_004");
	}
}
