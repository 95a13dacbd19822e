// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Log severity levels and threshold checks

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Log severity levels, ordered from most to least verbose.
///
/// A level doubles as a per-record tag and as a per-logger threshold. As a
/// threshold, `All` admits every record and `Off` admits none. `Config` sits
/// between `Debug` and `Info` and is only produced through the generic log
/// call; it has no convenience method of its own.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Serialize,
	Deserialize,
)]
pub enum LogLevel {
	All = 0,
	TraceVerbose = 1,
	Trace = 2,
	Debug = 3,
	Config = 4,
	Info = 5,
	Warn = 6,
	Error = 7,
	Off = 8,
}

impl LogLevel {
	/// Check whether a record at `level` passes this threshold.
	///
	/// `Off` as a threshold admits nothing, regardless of the record
	/// level.
	pub fn allows(self, level: LogLevel) -> bool {
		self != LogLevel::Off && level >= self
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::All => "ALL",
			LogLevel::TraceVerbose => "TRACE_VERBOSE",
			LogLevel::Trace => "TRACE",
			LogLevel::Debug => "DEBUG",
			LogLevel::Config => "CONFIG",
			LogLevel::Info => "INFO",
			LogLevel::Warn => "WARN",
			LogLevel::Error => "ERROR",
			LogLevel::Off => "OFF",
		}
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for LogLevel {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"ALL" => Ok(LogLevel::All),
			"TRACE_VERBOSE" => Ok(LogLevel::TraceVerbose),
			"TRACE" => Ok(LogLevel::Trace),
			"DEBUG" => Ok(LogLevel::Debug),
			"CONFIG" => Ok(LogLevel::Config),
			"INFO" => Ok(LogLevel::Info),
			"WARN" => Ok(LogLevel::Warn),
			"ERROR" => Ok(LogLevel::Error),
			"OFF" => Ok(LogLevel::Off),
			other => Err(format!("unknown log level: {}", other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_levels_are_totally_ordered() {
		assert!(LogLevel::All < LogLevel::TraceVerbose);
		assert!(LogLevel::TraceVerbose < LogLevel::Trace);
		assert!(LogLevel::Trace < LogLevel::Debug);
		assert!(LogLevel::Debug < LogLevel::Config);
		assert!(LogLevel::Config < LogLevel::Info);
		assert!(LogLevel::Info < LogLevel::Warn);
		assert!(LogLevel::Warn < LogLevel::Error);
		assert!(LogLevel::Error < LogLevel::Off);
	}

	#[test]
	fn test_info_threshold_admits_info_and_above() {
		let threshold = LogLevel::Info;
		assert!(threshold.allows(LogLevel::Info));
		assert!(threshold.allows(LogLevel::Warn));
		assert!(threshold.allows(LogLevel::Error));
		assert!(!threshold.allows(LogLevel::Config));
		assert!(!threshold.allows(LogLevel::Debug));
		assert!(!threshold.allows(LogLevel::Trace));
	}

	#[test]
	fn test_off_threshold_admits_nothing() {
		let threshold = LogLevel::Off;
		assert!(!threshold.allows(LogLevel::Error));
		assert!(!threshold.allows(LogLevel::Off));
		assert!(!threshold.allows(LogLevel::All));
	}

	#[test]
	fn test_all_threshold_admits_everything() {
		let threshold = LogLevel::All;
		assert!(threshold.allows(LogLevel::All));
		assert!(threshold.allows(LogLevel::TraceVerbose));
		assert!(threshold.allows(LogLevel::Error));
	}

	#[test]
	fn test_parse_round_trip() {
		for level in [
			LogLevel::All,
			LogLevel::TraceVerbose,
			LogLevel::Trace,
			LogLevel::Debug,
			LogLevel::Config,
			LogLevel::Info,
			LogLevel::Warn,
			LogLevel::Error,
			LogLevel::Off,
		] {
			assert_eq!(level.as_str().parse::<LogLevel>(), Ok(level));
		}
		assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warn));
		assert!("FATAL".parse::<LogLevel>().is_err());
	}
}
