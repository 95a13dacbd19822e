// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Tests for the logger registry and its snapshot

use std::{sync::Arc, thread};

use bootlog_sub_logging::LoggerRegistry;

#[test]
fn test_same_name_returns_identical_instance() {
	let registry = LoggerRegistry::new();
	let first = registry.logger("boot");
	let second = registry.logger("boot");
	assert!(Arc::ptr_eq(&first, &second));

	// Records accumulate in the shared buffer regardless of which
	// handle appended them.
	first.info("one");
	second.info("two");
	assert_eq!(first.record_count(), 2);
}

#[test]
fn test_different_names_produce_distinct_instances() {
	let registry = LoggerRegistry::new();
	let boot = registry.logger("boot");
	let loader = registry.logger("loader");
	assert!(!Arc::ptr_eq(&boot, &loader));
	assert_eq!(registry.len(), 2);
}

#[test]
fn test_snapshot_includes_loggers_without_records() {
	let registry = LoggerRegistry::new();
	registry.logger("silent");
	let logger = registry.logger("chatty");
	logger.info("hello");

	let handoff = registry.snapshot();
	assert_eq!(handoff.len(), 2);
	assert_eq!(handoff.records_for("silent").unwrap().len(), 0);
	assert_eq!(handoff.records_for("chatty").unwrap().len(), 1);
}

#[test]
fn test_snapshot_is_point_in_time() {
	let registry = LoggerRegistry::new();
	let logger = registry.logger("boot");
	logger.info("before");

	let handoff = registry.snapshot();
	logger.info("after");

	assert_eq!(handoff.records_for("boot").unwrap().len(), 1);
	assert_eq!(logger.record_count(), 2);
}

#[test]
fn test_empty_registry_snapshot_is_empty() {
	let registry = LoggerRegistry::new();
	assert!(registry.is_empty());
	assert!(registry.snapshot().is_empty());
}

#[test]
fn test_concurrent_lookup_creates_single_logger() {
	let registry = Arc::new(LoggerRegistry::new());
	let mut handles = Vec::new();
	for worker in 0..8 {
		let registry = Arc::clone(&registry);
		handles.push(thread::spawn(move || {
			for i in 0..100 {
				let logger = registry.logger("shared");
				logger.info(format!("worker {} message {}", worker, i));
			}
		}));
	}
	for handle in handles {
		handle.join().unwrap();
	}

	assert_eq!(registry.len(), 1);
	assert_eq!(registry.logger("shared").record_count(), 800);
}
