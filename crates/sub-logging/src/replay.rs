// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Replaying buffered records through the real backend

use bootlog_core::{Handoff, LogBackend, LogLevel, Result};

/// The backend call a logger threshold maps to at replay time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackendCall {
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

/// Threshold to backend call. `Off` maps to no call at all: such a logger's
/// records are dropped at replay, consistent with `Off` never being
/// loggable.
fn backend_call(threshold: LogLevel) -> Option<BackendCall> {
	match threshold {
		LogLevel::Error => Some(BackendCall::Error),
		LogLevel::Warn => Some(BackendCall::Warn),
		LogLevel::Info | LogLevel::Config => Some(BackendCall::Info),
		LogLevel::Debug => Some(BackendCall::Debug),
		LogLevel::Trace | LogLevel::TraceVerbose | LogLevel::All => {
			Some(BackendCall::Trace)
		}
		LogLevel::Off => None,
	}
}

/// Re-emit every buffered record of `handoff` through `backend`.
///
/// For each logger, the backend sink is obtained once by name and every
/// record is forwarded through the single call selected by the logger's
/// threshold; a record's own level does not participate in dispatch. Within
/// one logger, records are replayed in append order; across loggers the
/// order is unspecified. Only the raw message text is forwarded; an absent
/// message is forwarded as empty text. The first backend failure aborts the
/// replay and propagates.
pub fn replay_handoff(handoff: &Handoff, backend: &mut dyn LogBackend) -> Result<()> {
	for entry in handoff.entries() {
		let sink = backend.logger(&entry.name)?;
		let Some(call) = backend_call(entry.level) else {
			continue;
		};
		for record in &entry.records {
			let message = record.message().unwrap_or("");
			match call {
				BackendCall::Error => sink.error(message)?,
				BackendCall::Warn => sink.warn(message)?,
				BackendCall::Info => sink.info(message)?,
				BackendCall::Debug => sink.debug(message)?,
				BackendCall::Trace => sink.trace(message)?,
			}
		}
	}
	Ok(())
}

/// Holds a transferred handoff until the application phase is ready to
/// replay it.
///
/// This is the stored half of the two-step boundary crossing: the bootstrap
/// side calls [`set_handoff`](Self::set_handoff) with the registry snapshot,
/// and the application side calls [`replay`](Self::replay) once the backend
/// is configured. Replaying with no stored handoff is a no-op, never an
/// error.
#[derive(Default)]
pub struct LogReplay {
	handoff: Option<Handoff>,
}

impl LogReplay {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store the snapshot transferred from the bootstrap phase, replacing
	/// any previously stored one.
	pub fn set_handoff(&mut self, handoff: Handoff) {
		self.handoff = Some(handoff);
	}

	/// Replay the stored handoff through `backend`, consuming it. The
	/// handoff is read in full exactly once; a second call without a new
	/// `set_handoff` does nothing.
	pub fn replay(&mut self, backend: &mut dyn LogBackend) -> Result<()> {
		match self.handoff.take() {
			None => Ok(()),
			Some(handoff) => replay_handoff(&handoff, backend),
		}
	}
}
