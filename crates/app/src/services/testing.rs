//! Test doubles shared by the service tests.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use kpiscorer_domain::error::HostError;
use kpiscorer_domain::page::PageConfig;

use crate::ports::{AssetLocator, Host, Slot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ConfigurePage(PageConfig),
    EmitStyle(String),
    SplitColumns(Vec<u32>),
    EmitImage(Slot, PathBuf, u32),
    EmitHtml(Slot, String),
}

/// Records every call and enforces configure-first ordering.
#[derive(Default)]
pub struct RecordingHost {
    pub calls: Vec<Call>,
    pub fail_on_style: bool,
    pub blocks: usize,
}

impl RecordingHost {
    fn require_configured(&self, call: &'static str) -> Result<(), HostError> {
        if matches!(self.calls.first(), Some(Call::ConfigurePage(_))) {
            Ok(())
        } else {
            Err(HostError::NotConfigured { call })
        }
    }
}

impl Host for RecordingHost {
    fn configure_page(&mut self, config: &PageConfig) -> Result<(), HostError> {
        if !self.calls.is_empty() {
            return Err(HostError::AlreadyConfigured);
        }
        self.calls.push(Call::ConfigurePage(config.clone()));
        Ok(())
    }

    fn emit_style(&mut self, css: &str) -> Result<(), HostError> {
        self.require_configured("emit_style")?;
        if self.fail_on_style {
            return Err(HostError::UnservableAsset("style".to_string()));
        }
        self.calls.push(Call::EmitStyle(css.to_string()));
        Ok(())
    }

    fn split_columns(&mut self, ratios: &[u32]) -> Result<Vec<Slot>, HostError> {
        self.require_configured("split_columns")?;
        self.calls.push(Call::SplitColumns(ratios.to_vec()));
        let block = self.blocks;
        self.blocks += 1;
        Ok((0..ratios.len())
            .map(|index| Slot::Column { block, index })
            .collect())
    }

    fn emit_image(&mut self, slot: Slot, path: &Path, width_px: u32) -> Result<(), HostError> {
        self.require_configured("emit_image")?;
        self.calls
            .push(Call::EmitImage(slot, path.to_path_buf(), width_px));
        Ok(())
    }

    fn emit_html(&mut self, slot: Slot, html: &str) -> Result<(), HostError> {
        self.require_configured("emit_html")?;
        self.calls.push(Call::EmitHtml(slot, html.to_string()));
        Ok(())
    }
}

/// Locator whose answer can be flipped between renders.
#[derive(Default)]
pub struct StubLocator {
    present: AtomicBool,
    pub checks: AtomicUsize,
}

impl StubLocator {
    pub fn new(present: bool) -> Self {
        Self {
            present: AtomicBool::new(present),
            checks: AtomicUsize::new(0),
        }
    }

    pub fn set(&self, present: bool) {
        self.present.store(present, Ordering::SeqCst);
    }
}

impl AssetLocator for StubLocator {
    fn exists(&self, _path: &Path) -> bool {
        self.checks.fetch_add(1, Ordering::SeqCst);
        self.present.load(Ordering::SeqCst)
    }
}
