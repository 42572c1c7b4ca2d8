//! Logo asset location.

use std::path::{Path, PathBuf};

use crate::error::{KpiScorerError, ValidationError};

/// Location of the logo relative to the entry point's directory.
pub const LOGO_RELATIVE_PATH: &str = "assets/logo.png";

/// Absolute path to the header logo.
///
/// Resolved once at startup. The file is not required to exist; renderers
/// check for it every time they draw the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoAssetPath(PathBuf);

impl LogoAssetPath {
    /// Wrap an absolute path.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RelativeLogoPath`] when `path` is relative.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, KpiScorerError> {
        let path = path.into();
        if !path.is_absolute() {
            return Err(ValidationError::RelativeLogoPath(path.display().to_string()).into());
        }
        Ok(Self(path))
    }

    /// `<base_dir>/assets/logo.png`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RelativeLogoPath`] when `base_dir` is relative.
    pub fn under(base_dir: &Path) -> Result<Self, KpiScorerError> {
        Self::new(base_dir.join(LOGO_RELATIVE_PATH))
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Directory holding the logo, served to browsers as the assets root.
    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        self.0.parent().unwrap_or(&self.0)
    }
}

impl AsRef<Path> for LogoAssetPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absolute_base() -> PathBuf {
        std::env::temp_dir().join("kpiscorer")
    }

    #[test]
    fn should_resolve_logo_under_assets_dir() {
        let base = absolute_base();
        let logo = LogoAssetPath::under(&base).unwrap();
        assert_eq!(logo.as_path(), base.join("assets").join("logo.png"));
        assert_eq!(logo.assets_dir(), base.join("assets"));
    }

    #[test]
    fn should_reject_relative_base_dir() {
        let result = LogoAssetPath::under(Path::new("relative/dir"));
        assert!(matches!(
            result,
            Err(KpiScorerError::Validation(ValidationError::RelativeLogoPath(_)))
        ));
    }
}
