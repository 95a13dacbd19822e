// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Buffered log records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::thread::current;

use crate::{CapturedFailure, LogLevel};

/// One buffered logging event.
///
/// A record is assembled with the `with_*` constructors below and is frozen
/// the moment it is appended to a logger's buffer; from then on it is only
/// ever read. The logger name is deliberately not part of construction: the
/// owning logger stamps it at append time so the name always reflects the
/// buffer the record actually landed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
	/// Timestamp when the record was created
	pub timestamp: DateTime<Utc>,
	/// Severity the record was issued at
	pub level: LogLevel,
	/// Name of the owning logger, set at append time
	pub logger: Option<String>,
	/// Message text, possibly containing positional parameters like `{0}`.
	/// `None` means no message was supplied, which is distinct from an
	/// empty message.
	pub message: Option<String>,
	/// Ordered, opaque parameter values
	pub parameters: Vec<Value>,
	/// Failure associated with the record, if any
	pub thrown: Option<CapturedFailure>,
	/// Source class, populated by the entry/exit/throw tracing calls
	pub source_class: Option<String>,
	/// Source method, populated by the entry/exit/throw tracing calls
	pub source_method: Option<String>,
	/// Thread that created the record
	pub thread_id: String,
}

impl Record {
	pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
		Self::with_message(level, Some(message.into()))
	}

	/// A record with no message at all, as opposed to an empty one.
	pub fn without_message(level: LogLevel) -> Self {
		Self::with_message(level, None)
	}

	fn with_message(level: LogLevel, message: Option<String>) -> Self {
		Self {
			timestamp: Utc::now(),
			level,
			logger: None,
			message,
			parameters: Vec::new(),
			thrown: None,
			source_class: None,
			source_method: None,
			thread_id: format!("{:?}", current().id()),
		}
	}

	pub fn with_parameter(mut self, parameter: impl Serialize) -> Self {
		// Unserializable parameters degrade to null so positions of
		// later parameters do not shift.
		self.parameters
			.push(serde_json::to_value(parameter).unwrap_or(Value::Null));
		self
	}

	pub fn with_parameters(mut self, parameters: Vec<Value>) -> Self {
		self.parameters = parameters;
		self
	}

	pub fn with_thrown(mut self, thrown: CapturedFailure) -> Self {
		self.thrown = Some(thrown);
		self
	}

	pub fn with_source(
		mut self,
		class: impl Into<String>,
		method: impl Into<String>,
	) -> Self {
		self.source_class = Some(class.into());
		self.source_method = Some(method.into());
		self
	}

	pub fn message(&self) -> Option<&str> {
		self.message.as_deref()
	}

	/// Message text with positional parameters substituted.
	///
	/// `{0}` is replaced by the display text of the first parameter, `{1}`
	/// by the second, and so on. Placeholders without a matching parameter
	/// are left as written. Returns `None` when the record has no message.
	pub fn formatted_message(&self) -> Option<String> {
		let message = self.message.as_ref()?;
		if self.parameters.is_empty() {
			return Some(message.clone());
		}
		let mut out = message.clone();
		for (index, value) in self.parameters.iter().enumerate() {
			let token = format!("{{{}}}", index);
			if out.contains(&token) {
				out = out.replace(&token, &display_value(value));
			}
		}
		Some(out)
	}
}

fn display_value(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_new_captures_level_and_message() {
		let record = Record::new(LogLevel::Warn, "disk almost full");
		assert_eq!(record.level, LogLevel::Warn);
		assert_eq!(record.message(), Some("disk almost full"));
		assert!(record.logger.is_none());
		assert!(record.parameters.is_empty());
		assert!(record.thrown.is_none());
	}

	#[test]
	fn test_without_message_is_distinct_from_empty() {
		let absent = Record::without_message(LogLevel::Info);
		let empty = Record::new(LogLevel::Info, "");
		assert_eq!(absent.message(), None);
		assert_eq!(empty.message(), Some(""));
	}

	#[test]
	fn test_with_source_sets_class_and_method() {
		let record = Record::new(LogLevel::Trace, "ENTRY")
			.with_source("Loader", "load");
		assert_eq!(record.source_class.as_deref(), Some("Loader"));
		assert_eq!(record.source_method.as_deref(), Some("load"));
	}

	#[test]
	fn test_formatted_message_substitutes_positional_parameters() {
		let record = Record::new(LogLevel::Info, "loaded {0} entries from {1}")
			.with_parameter(42)
			.with_parameter("cache.db");
		assert_eq!(
			record.formatted_message().as_deref(),
			Some("loaded 42 entries from cache.db")
		);
	}

	#[test]
	fn test_formatted_message_keeps_unmatched_placeholders() {
		let record = Record::new(LogLevel::Info, "value {0} and {1}")
			.with_parameter("only");
		assert_eq!(
			record.formatted_message().as_deref(),
			Some("value only and {1}")
		);
	}

	#[test]
	fn test_formatted_message_none_without_message() {
		let record = Record::without_message(LogLevel::Debug);
		assert_eq!(record.formatted_message(), None);
	}

	#[test]
	fn test_with_parameters_replaces_sequence() {
		let record = Record::new(LogLevel::Debug, "raw")
			.with_parameters(vec![json!(true), json!(7)]);
		assert_eq!(record.parameters, vec![json!(true), json!(7)]);
	}
}
