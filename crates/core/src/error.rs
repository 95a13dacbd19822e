// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Error types for the buffering and replay paths

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The real backend could not instantiate a logger for a name. This
	/// is fatal: replay must not proceed against a half-initialized
	/// logging path.
	#[error("backend logger instantiation failed for `{name}`: {reason}")]
	BackendInit { name: String, reason: String },

	/// The backend rejected a replayed message.
	#[error("backend write failed: {0}")]
	Backend(String),

	#[error(transparent)]
	Io(#[from] io::Error),
}
