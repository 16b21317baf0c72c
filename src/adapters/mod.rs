//! Infrastructure adapters. Implement ports.
//!
//! Music catalog, sentiment inference, terminal UI. Map errors to DomainError.

pub mod catalog;
pub mod sentiment;
pub mod ui;
