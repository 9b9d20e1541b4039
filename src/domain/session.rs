use serde::{Deserialize, Serialize};

use super::theme::PreviewTheme;

/// Keep the ten most recently opened files
const RECENT_FILES_CAP: usize = 10;

/// Mutable shell state, made explicit.
///
/// The windows hold one of these and pass it by reference into whatever
/// component needs it; nothing in this crate stores a copy. Persisting the
/// session (if at all) is the shell's business, hence only the serde derives
/// live here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSession {
    #[serde(default)]
    pub theme: PreviewTheme,

    #[serde(default = "default_assistant_enabled")]
    pub assistant_enabled: bool,

    /// Most recent first, no duplicates, capped at ten entries.
    #[serde(default)]
    pub recent_files: Vec<String>,
}

fn default_assistant_enabled() -> bool {
    true
}

impl Default for EditorSession {
    fn default() -> Self {
        Self {
            theme: PreviewTheme::default(),
            assistant_enabled: default_assistant_enabled(),
            recent_files: Vec::new(),
        }
    }
}

impl EditorSession {
    /// Move `path` to the front of the recent-files list, dropping any
    /// earlier occurrence and anything past the cap.
    pub fn record_recent_file(&mut self, path: &str) {
        self.recent_files.retain(|p| p != path);
        self.recent_files.insert(0, path.to_string());
        self.recent_files.truncate(RECENT_FILES_CAP);
    }
}
