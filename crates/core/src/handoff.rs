// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! The snapshot value transferred across the phase boundary

use serde::{Deserialize, Serialize};

use crate::{LogLevel, Record};

/// Point-in-time copy of one logger: its name, its threshold at snapshot
/// time, and every record buffered so far in append order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffEntry {
	pub name: String,
	pub level: LogLevel,
	pub records: Vec<Record>,
}

/// Snapshot of every registered logger, transferred by value from the
/// bootstrap phase to the application phase.
///
/// Order across entries is unspecified; order within an entry's records is
/// the original append order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Handoff {
	entries: Vec<HandoffEntry>,
}

impl Handoff {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, entry: HandoffEntry) {
		self.entries.push(entry);
	}

	pub fn entries(&self) -> &[HandoffEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Records of the logger with the given name, if it is present.
	pub fn records_for(&self, name: &str) -> Option<&[Record]> {
		self.entries
			.iter()
			.find(|entry| entry.name == name)
			.map(|entry| entry.records.as_slice())
	}
}

impl FromIterator<HandoffEntry> for Handoff {
	fn from_iter<I: IntoIterator<Item = HandoffEntry>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl IntoIterator for Handoff {
	type Item = HandoffEntry;
	type IntoIter = std::vec::IntoIter<HandoffEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}
