// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Captured failure values attached to buffered records

use std::{error, fmt};

use serde::{Deserialize, Serialize};

/// A failure captured into a record at buffering time.
///
/// Records outlive the error values they describe, so the failure is
/// flattened into owned text, preserving the `source()` chain as nested
/// causes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedFailure {
	pub message: String,
	pub cause: Option<Box<CapturedFailure>>,
}

impl CapturedFailure {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			cause: None,
		}
	}

	/// Capture an error together with its full `source()` chain.
	pub fn from_error(error: &dyn error::Error) -> Self {
		Self {
			message: error.to_string(),
			cause: error
				.source()
				.map(|cause| Box::new(Self::from_error(cause))),
		}
	}

	/// Number of failures in the chain, this one included.
	pub fn chain_len(&self) -> usize {
		let mut len = 1;
		let mut current = self.cause.as_deref();
		while let Some(failure) = current {
			len += 1;
			current = failure.cause.as_deref();
		}
		len
	}
}

impl fmt::Display for CapturedFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl error::Error for CapturedFailure {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		self.cause
			.as_deref()
			.map(|cause| cause as &(dyn error::Error + 'static))
	}
}

#[cfg(test)]
mod tests {
	use std::io;

	use super::*;

	#[derive(Debug)]
	struct Outer {
		inner: io::Error,
	}

	impl fmt::Display for Outer {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			write!(f, "outer failed")
		}
	}

	impl std::error::Error for Outer {
		fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
			Some(&self.inner)
		}
	}

	#[test]
	fn test_from_error_preserves_cause_chain() {
		let outer = Outer {
			inner: io::Error::new(io::ErrorKind::NotFound, "missing file"),
		};

		let captured = CapturedFailure::from_error(&outer);
		assert_eq!(captured.message, "outer failed");
		assert_eq!(captured.chain_len(), 2);
		assert_eq!(captured.cause.as_deref().unwrap().message, "missing file");
	}

	#[test]
	fn test_new_has_no_cause() {
		let captured = CapturedFailure::new("boom");
		assert_eq!(captured.chain_len(), 1);
		assert!(captured.cause.is_none());
		assert_eq!(captured.to_string(), "boom");
	}
}
