// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Console logging backend

use std::{
	collections::HashMap,
	io::{self, Write},
};

use bootlog_core::{LeveledLogger, LogBackend, Result};
use chrono::Utc;
use colored::{Color, Colorize};

/// Backend that writes replayed records to the console.
///
/// Sinks are created lazily per logger name and reused, so repeated lookups
/// for one name address the same sink.
pub struct ConsoleBackend {
	use_color: bool,
	stderr_for_errors: bool,
	show_timestamps: bool,
	loggers: HashMap<String, ConsoleLogger>,
}

impl ConsoleBackend {
	pub fn new() -> Self {
		Self {
			use_color: true,
			stderr_for_errors: true,
			show_timestamps: true,
			loggers: HashMap::new(),
		}
	}

	pub fn with_color(mut self, enabled: bool) -> Self {
		self.use_color = enabled;
		self
	}

	/// Send error output to stderr instead of stdout.
	pub fn with_stderr_for_errors(mut self, enabled: bool) -> Self {
		self.stderr_for_errors = enabled;
		self
	}

	pub fn with_timestamps(mut self, enabled: bool) -> Self {
		self.show_timestamps = enabled;
		self
	}
}

impl Default for ConsoleBackend {
	fn default() -> Self {
		Self::new()
	}
}

impl LogBackend for ConsoleBackend {
	fn logger(&mut self, name: &str) -> Result<&mut dyn LeveledLogger> {
		let logger = self
			.loggers
			.entry(name.to_string())
			.or_insert_with(|| ConsoleLogger {
				name: name.to_string(),
				use_color: self.use_color,
				stderr_for_errors: self.stderr_for_errors,
				show_timestamps: self.show_timestamps,
			});
		Ok(logger)
	}
}

struct ConsoleLogger {
	name: String,
	use_color: bool,
	stderr_for_errors: bool,
	show_timestamps: bool,
}

impl ConsoleLogger {
	fn write(&self, tag: &str, color: Color, message: &str, to_stderr: bool) -> Result<()> {
		// Pad before coloring: escape codes would break the alignment.
		let padded = format!("{:<5}", tag);
		let tag_text = if self.use_color {
			padded.as_str().color(color).bold().to_string()
		} else {
			padded
		};
		let line = if self.show_timestamps {
			format!(
				"{} {} [{}] {}",
				Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
				tag_text,
				self.name,
				message
			)
		} else {
			format!("{} [{}] {}", tag_text, self.name, message)
		};
		if to_stderr {
			writeln!(io::stderr().lock(), "{}", line)?;
		} else {
			writeln!(io::stdout().lock(), "{}", line)?;
		}
		Ok(())
	}
}

impl LeveledLogger for ConsoleLogger {
	fn error(&mut self, message: &str) -> Result<()> {
		self.write("ERROR", Color::Red, message, self.stderr_for_errors)
	}

	fn warn(&mut self, message: &str) -> Result<()> {
		self.write("WARN", Color::Yellow, message, false)
	}

	fn info(&mut self, message: &str) -> Result<()> {
		self.write("INFO", Color::Green, message, false)
	}

	fn debug(&mut self, message: &str) -> Result<()> {
		self.write("DEBUG", Color::Blue, message, false)
	}

	fn trace(&mut self, message: &str) -> Result<()> {
		self.write("TRACE", Color::Magenta, message, false)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_logger_is_created_once_per_name() {
		let mut backend = ConsoleBackend::new();
		backend.logger("boot").unwrap();
		backend.logger("boot").unwrap();
		backend.logger("loader").unwrap();
		assert_eq!(backend.loggers.len(), 2);
	}

	#[test]
	fn test_sinks_inherit_backend_settings() {
		let mut backend = ConsoleBackend::new()
			.with_color(false)
			.with_stderr_for_errors(false)
			.with_timestamps(false);
		backend.logger("boot").unwrap();
		let sink = &backend.loggers["boot"];
		assert!(!sink.use_color);
		assert!(!sink.stderr_for_errors);
		assert!(!sink.show_timestamps);
	}
}
