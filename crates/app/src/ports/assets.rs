//! Asset port — existence checks for files the page may reference.

use std::path::Path;

/// Answers whether an asset is currently available.
///
/// Implementations must not cache: callers rely on every call reflecting
/// the current state of the backing store.
pub trait AssetLocator {
    /// Return `true` when `path` exists. Failures count as absent.
    fn exists(&self, path: &Path) -> bool;
}

impl<T: AssetLocator + ?Sized> AssetLocator for std::sync::Arc<T> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
