//! GUI-independent core of the SunsetMD Markdown editors.
//!
//! The SunsetMD shells (basic and pro) are thin widget trees; everything
//! that survives a change of GUI toolkit lives here:
//!
//! - `domain/` - Core data structures (PreviewTheme, EditorSession)
//! - `services/` - Pure text operations (heuristics, stats, outline, snippets)
//! - `controllers/` - Orchestration (assistant dispatch, preview rendering)
//! - `infrastructure/` - Error types
//!
//! Nothing in this crate touches the filesystem or the network; the shell
//! owns all I/O and merely displays the strings produced here.

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::assistant::{AssistantAction, AssistantController, AssistantOutcome};
pub use controllers::preview::{render_basic_document, render_document, render_fragment};
pub use domain::session::EditorSession;
pub use domain::theme::PreviewTheme;
pub use infrastructure::error::{CoreError, Result};
pub use services::heuristics::{check_grammar, improve_writing, summarize};
pub use services::outline::{OutlineEntry, extract_outline};
pub use services::snippets::MarkdownSnippet;
pub use services::stats::TextStats;
