// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Concrete logging backends

mod console;
mod console_builder;

pub use console::ConsoleBackend;
pub use console_builder::ConsoleBuilder;
