// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! The deferred logger: a named, append-only record buffer

use std::error;

use bootlog_core::{CapturedFailure, LogLevel, Record};
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

const ENTRY: &str = "ENTRY";
const RETURN: &str = "RETURN";
const RETURN_WITH: &str = "RETURN {0}";
const THROW: &str = "THROW";

/// A named logger that buffers instead of writing.
///
/// Mimics the leveled surface of a conventional logger, but every call
/// appends a [`Record`] to an in-memory buffer, unconditionally: the
/// threshold never gates buffering, it only answers [`is_loggable`] queries
/// and selects the backend call at replay time. Records are appended in call
/// order and never reordered or removed.
///
/// All methods take `&self`; the buffer and threshold are lock-guarded so a
/// logger can be shared across threads during bootstrap.
///
/// [`is_loggable`]: DeferredLogger::is_loggable
pub struct DeferredLogger {
	name: String,
	level: RwLock<LogLevel>,
	records: RwLock<Vec<Record>>,
}

impl DeferredLogger {
	/// Create a logger with the default `Info` threshold and an empty
	/// buffer. Loggers meant to be shared by name should come from
	/// [`LoggerRegistry::logger`](crate::LoggerRegistry::logger) instead.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			level: RwLock::new(LogLevel::Info),
			records: RwLock::new(Vec::new()),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Current threshold.
	pub fn level(&self) -> LogLevel {
		*self.level.read()
	}

	/// Replace the threshold. Takes effect for subsequent
	/// [`is_loggable`](Self::is_loggable) calls immediately and has no
	/// effect on records already buffered.
	pub fn set_level(&self, level: LogLevel) {
		*self.level.write() = level;
	}

	/// Whether a record at `level` would pass the current threshold.
	/// Reads the threshold at call time, never a cached value.
	pub fn is_loggable(&self, level: LogLevel) -> bool {
		self.level().allows(level)
	}

	pub fn error(&self, message: impl Into<String>) {
		self.log_record(Record::new(LogLevel::Error, message));
	}

	pub fn warn(&self, message: impl Into<String>) {
		self.log_record(Record::new(LogLevel::Warn, message));
	}

	pub fn info(&self, message: impl Into<String>) {
		self.log_record(Record::new(LogLevel::Info, message));
	}

	pub fn debug(&self, message: impl Into<String>) {
		self.log_record(Record::new(LogLevel::Debug, message));
	}

	pub fn trace(&self, message: impl Into<String>) {
		self.log_record(Record::new(LogLevel::Trace, message));
	}

	pub fn trace_verbose(&self, message: impl Into<String>) {
		self.log_record(Record::new(LogLevel::TraceVerbose, message));
	}

	/// Log a method entry.
	pub fn entering(&self, class: &str, method: &str) {
		self.log_record(
			Record::new(LogLevel::Trace, ENTRY).with_source(class, method),
		);
	}

	/// Log a method entry with one parameter.
	pub fn entering_with(&self, class: &str, method: &str, parameter: impl Serialize) {
		self.log_record(
			Record::new(LogLevel::Trace, ENTRY)
				.with_source(class, method)
				.with_parameter(parameter),
		);
	}

	/// Log a method entry with a parameter sequence.
	pub fn entering_with_params(&self, class: &str, method: &str, parameters: Vec<Value>) {
		self.log_record(
			Record::new(LogLevel::Trace, ENTRY)
				.with_source(class, method)
				.with_parameters(parameters),
		);
	}

	/// Log a method return.
	pub fn exiting(&self, class: &str, method: &str) {
		self.log_record(
			Record::new(LogLevel::Trace, RETURN).with_source(class, method),
		);
	}

	/// Log a method return with the returned value.
	pub fn exiting_with(&self, class: &str, method: &str, result: impl Serialize) {
		self.log_record(
			Record::new(LogLevel::Trace, RETURN_WITH)
				.with_source(class, method)
				.with_parameter(result),
		);
	}

	/// Log an error about to be propagated out of a method.
	pub fn throwing(&self, class: &str, method: &str, error: &dyn error::Error) {
		self.log_record(
			Record::new(LogLevel::Trace, THROW)
				.with_source(class, method)
				.with_thrown(CapturedFailure::from_error(error)),
		);
	}

	/// Log a message at an explicit level.
	pub fn log(&self, level: LogLevel, message: impl Into<String>) {
		self.log_record(Record::new(level, message));
	}

	/// Log a message at an explicit level with one parameter.
	pub fn log_with(
		&self,
		level: LogLevel,
		message: impl Into<String>,
		parameter: impl Serialize,
	) {
		self.log_record(Record::new(level, message).with_parameter(parameter));
	}

	/// Log a message at an explicit level with a parameter sequence.
	pub fn log_with_params(
		&self,
		level: LogLevel,
		message: impl Into<String>,
		parameters: Vec<Value>,
	) {
		self.log_record(Record::new(level, message).with_parameters(parameters));
	}

	/// Log a message at an explicit level with an associated failure.
	pub fn log_with_error(
		&self,
		level: LogLevel,
		message: impl Into<String>,
		error: &dyn error::Error,
	) {
		self.log_record(
			Record::new(level, message)
				.with_thrown(CapturedFailure::from_error(error)),
		);
	}

	/// Append a record to the buffer, stamping it with this logger's
	/// name. This is the single append path every logging call funnels
	/// through.
	pub fn log_record(&self, mut record: Record) {
		record.logger = Some(self.name.clone());
		self.records.write().push(record);
	}

	/// Point-in-time copy of the buffered records, in append order.
	pub fn records(&self) -> Vec<Record> {
		self.records.read().clone()
	}

	pub fn record_count(&self) -> usize {
		self.records.read().len()
	}
}
