//! Filesystem-backed asset access.

use std::path::Path;

use kpiscorer_app::ports::AssetLocator;

/// URL prefix under which the assets directory is served.
pub const ASSETS_ROUTE: &str = "/assets";

/// Checks asset existence directly on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssetLocator;

impl AssetLocator for FsAssetLocator {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_file_presence_without_caching() {
        let dir = tempfile::tempdir().unwrap();
        let logo = dir.path().join("logo.png");
        let locator = FsAssetLocator;

        assert!(!locator.exists(&logo));
        std::fs::write(&logo, b"png").unwrap();
        assert!(locator.exists(&logo));
        std::fs::remove_file(&logo).unwrap();
        assert!(!locator.exists(&logo));
    }
}
