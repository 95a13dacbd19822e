// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! One deferred logger per name, for the lifetime of a registry

use std::{collections::HashMap, sync::Arc};

use bootlog_core::{Handoff, HandoffEntry};
use parking_lot::RwLock;

use crate::DeferredLogger;

/// Mapping from logger name to its deferred buffer.
///
/// A registry is an explicitly constructed, lifetime-scoped object: the
/// bootstrap phase owns one, passes it to whatever needs to log, and
/// snapshots it once at the phase boundary. There is no ambient global
/// registry; reusing a name safely after replay means constructing a fresh
/// registry.
#[derive(Default)]
pub struct LoggerRegistry {
	loggers: RwLock<HashMap<String, Arc<DeferredLogger>>>,
}

impl LoggerRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Find or create the logger for `name`.
	///
	/// Lookup-or-create is atomic: concurrent callers asking for the same
	/// name always receive the same instance, so accumulated records are
	/// shared.
	pub fn logger(&self, name: &str) -> Arc<DeferredLogger> {
		if let Some(existing) = self.loggers.read().get(name) {
			return Arc::clone(existing);
		}
		let mut loggers = self.loggers.write();
		Arc::clone(
			loggers.entry(name.to_string())
				.or_insert_with(|| Arc::new(DeferredLogger::new(name))),
		)
	}

	/// Snapshot every registered logger, including ones that never
	/// received a record. Each entry carries the logger's threshold and a
	/// copy of its records at call time; later logging cannot mutate the
	/// snapshot. Entry order is unspecified.
	pub fn snapshot(&self) -> Handoff {
		self.loggers
			.read()
			.iter()
			.map(|(name, logger)| HandoffEntry {
				name: name.clone(),
				level: logger.level(),
				records: logger.records(),
			})
			.collect()
	}

	pub fn len(&self) -> usize {
		self.loggers.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.loggers.read().is_empty()
	}
}
