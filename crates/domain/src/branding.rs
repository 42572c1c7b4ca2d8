//! Branding — the fixed strings shown in the browser tab and the header.

use serde::{Deserialize, Serialize};

use crate::error::{KpiScorerError, ValidationError};

/// Browser tab title of the Định Hóa dashboard.
pub const PAGE_TITLE: &str = "KPI Scorer – Định Hóa (Full Suite)";
/// Header heading.
pub const HEADING: &str = "KPI Đội quản lý Điện lực khu vực Định Hóa";
/// Header subtitle listing the suite's features.
pub const SUBTITLE: &str = "Full Suite · Import linh hoạt · Nhập tay · Báo cáo & Email";

/// Title, heading and subtitle of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    pub page_title: String,
    pub heading: String,
    pub subtitle: String,
}

impl Branding {
    /// Create a branding descriptor, rejecting empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`KpiScorerError::Validation`] when any string is empty.
    pub fn new(
        page_title: impl Into<String>,
        heading: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Result<Self, KpiScorerError> {
        let branding = Self {
            page_title: page_title.into(),
            heading: heading.into(),
            subtitle: subtitle.into(),
        };
        branding.validate()?;
        Ok(branding)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`KpiScorerError::Validation`] naming the first empty field.
    pub fn validate(&self) -> Result<(), KpiScorerError> {
        let fields = [
            ("page_title", &self.page_title),
            ("heading", &self.heading),
            ("subtitle", &self.subtitle),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::Empty { field }.into());
            }
        }
        Ok(())
    }
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            page_title: PAGE_TITLE.to_string(),
            heading: HEADING.to_string(),
            subtitle: SUBTITLE.to_string(),
        }
    }
}
