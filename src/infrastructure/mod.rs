//! Infrastructure layer - cross-cutting utilities.
//!
//! Currently just the crate error type; the GUI shell brings its own
//! platform integrations.

pub mod error;
