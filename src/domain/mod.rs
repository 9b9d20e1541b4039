//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Preview themes
//! - The explicit editor session state the shell passes around

pub mod session;
pub mod theme;

pub use session::EditorSession;
pub use theme::PreviewTheme;
