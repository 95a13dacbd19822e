// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Builder for configuring the console logging backend

use super::console::ConsoleBackend;

/// Builder for configuring the console backend with a fluent API
#[derive(Debug, Clone)]
pub struct ConsoleBuilder {
	use_color: bool,
	stderr_for_errors: bool,
	show_timestamps: bool,
}

impl ConsoleBuilder {
	/// Create a new console builder with default settings
	pub fn new() -> Self {
		Self {
			use_color: true,
			stderr_for_errors: true,
			show_timestamps: true,
		}
	}

	/// Enable or disable colored output
	pub fn color(mut self, enabled: bool) -> Self {
		self.use_color = enabled;
		self
	}

	/// Use stderr for error level output
	pub fn stderr_for_errors(mut self, enabled: bool) -> Self {
		self.stderr_for_errors = enabled;
		self
	}

	/// Prefix every line with a UTC timestamp
	pub fn timestamps(mut self, enabled: bool) -> Self {
		self.show_timestamps = enabled;
		self
	}

	/// Build the console backend with the configured settings
	pub fn build(self) -> ConsoleBackend {
		ConsoleBackend::new()
			.with_color(self.use_color)
			.with_stderr_for_errors(self.stderr_for_errors)
			.with_timestamps(self.show_timestamps)
	}
}

impl Default for ConsoleBuilder {
	fn default() -> Self {
		Self::new()
	}
}
