// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps a diagnostic into an [`Error`](crate::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

/// Early-returns `Err` built from a diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::Error($diagnostic))
	};
}

/// `Err` built from a diagnostic, for use in expression position.
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::Error($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use crate::{Result, diagnostic::catalog::table_not_found};

	fn lookup(found: bool) -> Result<u8> {
		if !found {
			return_error!(table_not_found("t"));
		}
		Ok(1)
	}

	#[test]
	fn test_return_error() {
		assert_eq!(lookup(true).unwrap(), 1);
		let err = lookup(false).unwrap_err();
		assert_eq!(err.code, "CA_004");
	}

	#[test]
	fn test_err_expression() {
		let result: Result<()> = err!(table_not_found("t"));
		assert_eq!(result.unwrap_err().diagnostic().code, "CA_004");
	}
}
