use serde::{Deserialize, Serialize};

/// Visual themes for the rendered Markdown preview.
///
/// Each theme maps to a fixed CSS override block embedded in the document
/// head. The shell selects the theme; the renderer never infers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PreviewTheme {
    #[default]
    Default,
    Dark,
    EyeCareGreen,
    DeepBlue,
}

impl PreviewTheme {
    /// Get the CSS override fragment for this theme
    pub fn css(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Dark => {
                "body { background-color: #2d2d2d; color: #f0f0f0; }\n\
                 h1, h2, h3, h4, h5, h6 { color: #ffffff; }\n\
                 a { color: #66ccff; }\n\
                 code { background: #3d3d3d; color: #f0f0f0; }\n\
                 pre { background: #3d3d3d; color: #f0f0f0; }\n\
                 blockquote { border-left-color: #666; color: #ccc; }\n\
                 table { border-color: #555; }\n\
                 th, td { border-color: #555; }\n\
                 th { background-color: #3d3d3d; }\n"
            }
            Self::EyeCareGreen => {
                "body { background-color: #cce8cf; color: #333; }\n\
                 h1, h2, h3, h4, h5, h6 { color: #2d5016; }\n\
                 a { color: #1e6f3c; }\n"
            }
            Self::DeepBlue => {
                "body { background-color: #1a365d; color: #e2e8f0; }\n\
                 h1, h2, h3, h4, h5, h6 { color: #ffffff; }\n\
                 a { color: #63b3ed; }\n\
                 code { background: #2d3748; }\n\
                 pre { background: #2d3748; }\n"
            }
        }
    }

    /// Get the display name for this theme
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Dark => "Dark",
            Self::EyeCareGreen => "Eye-care Green",
            Self::DeepBlue => "Deep Blue",
        }
    }

    /// Get all available themes
    pub fn all() -> &'static [PreviewTheme] {
        &[
            Self::Default,
            Self::Dark,
            Self::EyeCareGreen,
            Self::DeepBlue,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_has_no_overrides() {
        assert!(PreviewTheme::Default.css().is_empty());
    }

    #[test]
    fn test_dark_theme_sets_background() {
        assert!(PreviewTheme::Dark.css().contains("background-color: #2d2d2d"));
    }

    #[test]
    fn test_all_themes_listed() {
        assert_eq!(PreviewTheme::all().len(), 4);
        assert_eq!(PreviewTheme::all()[0], PreviewTheme::Default);
    }

    #[test]
    fn test_theme_serialization() {
        let json = serde_json::to_string(&PreviewTheme::EyeCareGreen).unwrap();
        assert_eq!(json, "\"EyeCareGreen\"");
        let theme: PreviewTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, PreviewTheme::EyeCareGreen);
    }
}
