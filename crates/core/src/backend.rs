// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Backend capability the replay engine writes into

use crate::Result;

/// A named sink of the real logging backend, one discrete call per level.
pub trait LeveledLogger: Send {
	fn error(&mut self, message: &str) -> Result<()>;
	fn warn(&mut self, message: &str) -> Result<()>;
	fn info(&mut self, message: &str) -> Result<()>;
	fn debug(&mut self, message: &str) -> Result<()>;
	fn trace(&mut self, message: &str) -> Result<()>;
}

/// The real logging backend: get-or-create a named sink.
///
/// Repeated calls with the same name must address the same underlying sink.
/// A failure here means the backend cannot be constructed at all and is
/// fatal to replay.
pub trait LogBackend: Send {
	fn logger(&mut self, name: &str) -> Result<&mut dyn LeveledLogger>;
}
