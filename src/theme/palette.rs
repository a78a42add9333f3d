//! UI theme palette
//!
//! Brand colors for the dashboard's light and dark themes and the UI locale.

use serde::{Deserialize, Serialize};

/// Named colors of one theme variant, as `#RRGGBB` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub error: String,
    pub info: String,
    pub success: String,
    pub warning: String,
}

impl UiPalette {
    pub fn light() -> Self {
        Self::with_primary("#00a2ff")
    }

    pub fn dark() -> Self {
        Self::with_primary("#0066ff")
    }

    // The variants only differ in their primary color
    fn with_primary(primary: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: "#424242".to_string(),
            accent: "#82B1FF".to_string(),
            error: "#FF5252".to_string(),
            info: "#2196F3".to_string(),
            success: "#4CAF50".to_string(),
            warning: "#FFC107".to_string(),
        }
    }
}

/// Both palettes plus the UI language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiTheme {
    pub light: UiPalette,
    pub dark: UiPalette,
    pub locale: String,
}

impl UiTheme {
    /// Palette for the given theme mode
    pub fn palette(&self, dark: bool) -> &UiPalette {
        if dark {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            light: UiPalette::light(),
            dark: UiPalette::dark(),
            locale: "fi".to_string(),
        }
    }
}
