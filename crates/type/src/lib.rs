// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::{
	Error,
	diagnostic::{self, Diagnostic},
};
pub use value::field_type::FieldType;

pub mod error;
pub mod value;

pub type Result<T> = std::result::Result<T, Error>;
