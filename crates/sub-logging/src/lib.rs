// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Deferred logging for the bootstrap phase
//!
//! Bootstrap code obtains a [`DeferredLogger`] from a [`LoggerRegistry`] and
//! logs against it as if the real subsystem were up; every call is buffered
//! as an immutable record instead of being written anywhere. Once the real
//! backend is configured, the registry's [`LoggerRegistry::snapshot`] is
//! handed to [`LogReplay`], which re-emits every buffer through the backend.

mod backend;
mod logger;
mod registry;
mod replay;

pub use backend::{ConsoleBackend, ConsoleBuilder};
pub use bootlog_core::{
	CapturedFailure, Error, Handoff, HandoffEntry, LeveledLogger, LogBackend, LogLevel, Record,
	Result,
};
pub use logger::DeferredLogger;
pub use registry::LoggerRegistry;
pub use replay::{LogReplay, replay_handoff};
