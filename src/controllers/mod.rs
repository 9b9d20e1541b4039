//! Controllers layer - orchestration between the shell and the services.
//!
//! - Assistant dispatch (single-slot background worker)
//! - Markdown preview rendering

pub mod assistant;
pub mod preview;
