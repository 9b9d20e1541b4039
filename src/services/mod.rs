//! Services layer - pure text operations.
//!
//! Everything here is a total function over `&str`: no I/O, no shared
//! state, no panics on any input.
//!
//! - Assistant heuristics (improve / summarize / grammar check)
//! - Text statistics
//! - Heading outline extraction
//! - Markdown snippet builders

pub mod heuristics;
pub mod outline;
pub mod snippets;
pub mod stats;
