//! Page configuration applied to the host before anything is rendered.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::branding::Branding;

/// Icon shown next to the page title.
pub const PAGE_ICON: &str = "🔐";

/// Width mode of the page body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Content spans the full browser width.
    #[default]
    Wide,
}

impl Layout {
    /// Maximum width of the main container for this layout.
    #[must_use]
    pub fn max_width(self) -> &'static str {
        match self {
            Self::Wide => "100%",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wide => f.write_str("wide"),
        }
    }
}

/// Title, icon and layout of the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub title: String,
    pub icon: String,
    pub layout: Layout,
}

impl PageConfig {
    /// The wide, padlock-iconed configuration used by the dashboard.
    #[must_use]
    pub fn for_branding(branding: &Branding) -> Self {
        Self {
            title: branding.page_title.clone(),
            icon: PAGE_ICON.to_string(),
            layout: Layout::Wide,
        }
    }
}
