//! Host port — the rendering capabilities of a dashboard runtime.

use std::path::Path;

use kpiscorer_domain::error::HostError;
use kpiscorer_domain::page::PageConfig;

/// Where an element is placed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The top-level page body.
    Main,
    /// A column created by [`Host::split_columns`], indexed from the start
    /// of the host's layout blocks.
    Column { block: usize, index: usize },
}

/// Rendering calls understood by a dashboard runtime.
///
/// A host must receive [`Host::configure_page`] exactly once, before any
/// other call. Calls arriving out of order fail with
/// [`HostError::NotConfigured`] or [`HostError::AlreadyConfigured`].
pub trait Host {
    /// Set the page title, icon and layout.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::AlreadyConfigured`] on a second call.
    fn configure_page(&mut self, config: &PageConfig) -> Result<(), HostError>;

    /// Inject a raw stylesheet into the page.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::NotConfigured`] before configuration.
    fn emit_style(&mut self, css: &str) -> Result<(), HostError>;

    /// Split a new row into columns with the given relative widths and
    /// return one slot per column.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidColumns`] for empty ratios or a zero
    /// weight, or [`HostError::NotConfigured`] before configuration.
    fn split_columns(&mut self, ratios: &[u32]) -> Result<Vec<Slot>, HostError>;

    /// Display the image at `path`, `width_px` pixels wide.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] when the slot is unknown, the host cannot
    /// expose the file, or the page is not configured.
    fn emit_image(&mut self, slot: Slot, path: &Path, width_px: u32) -> Result<(), HostError>;

    /// Insert raw, unescaped HTML.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] when the slot is unknown or the page is not
    /// configured.
    fn emit_html(&mut self, slot: Slot, html: &str) -> Result<(), HostError>;
}
