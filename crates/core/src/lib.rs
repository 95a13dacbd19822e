// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Core types for deferred bootstrap logging
//!
//! Everything that crosses the boundary between the bootstrap phase and the
//! application phase lives here: the severity ordering, the buffered record,
//! the handoff snapshot, and the backend capability the replay engine writes
//! into.

mod backend;
mod error;
mod failure;
mod handoff;
mod level;
mod record;

pub use backend::{LeveledLogger, LogBackend};
pub use error::{Error, Result};
pub use failure::CapturedFailure;
pub use handoff::{Handoff, HandoffEntry};
pub use level::LogLevel;
pub use record::Record;
