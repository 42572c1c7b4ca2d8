//! HTML host — records rendering calls into a [`PageDocument`].

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use kpiscorer_app::ports::{Host, Slot};
use kpiscorer_domain::error::HostError;
use kpiscorer_domain::page::PageConfig;

use crate::assets::ASSETS_ROUTE;

/// Where images may be served from.
#[derive(Debug, Clone)]
pub struct HostSettings {
    assets_root: PathBuf,
}

impl HostSettings {
    /// Serve images found below `assets_root` under [`ASSETS_ROUTE`].
    pub fn new(assets_root: impl Into<PathBuf>) -> Self {
        Self {
            assets_root: assets_root.into(),
        }
    }

    #[must_use]
    pub fn assets_root(&self) -> &Path {
        &self.assets_root
    }

    /// Map a file below the assets root to its URL.
    fn asset_url(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.assets_root).ok()?;
        let mut url = String::from(ASSETS_ROUTE);
        for component in relative.components() {
            let Component::Normal(part) = component else {
                return None;
            };
            url.push('/');
            url.push_str(part.to_str()?);
        }
        (url.len() > ASSETS_ROUTE.len()).then_some(url)
    }
}

/// A single rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Image { src: String, width: u32 },
    Html { html: String },
}

/// A top-level block of the page body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Element { element: Element },
    Columns {
        ratios: Vec<u32>,
        columns: Vec<Vec<Element>>,
    },
}

/// Everything a run of the bootstrap asked the host to display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageDocument {
    pub config: Option<PageConfig>,
    pub styles: Vec<String>,
    pub blocks: Vec<Block>,
}

/// [`Host`] implementation producing a [`PageDocument`].
///
/// One instance per render; the document is taken with [`HtmlHost::into_document`].
pub struct HtmlHost {
    settings: Arc<HostSettings>,
    document: PageDocument,
}

impl HtmlHost {
    #[must_use]
    pub fn new(settings: Arc<HostSettings>) -> Self {
        Self {
            settings,
            document: PageDocument::default(),
        }
    }

    #[must_use]
    pub fn into_document(self) -> PageDocument {
        self.document
    }

    fn require_configured(&self, call: &'static str) -> Result<(), HostError> {
        if self.document.config.is_none() {
            return Err(HostError::NotConfigured { call });
        }
        Ok(())
    }

    fn place(&mut self, slot: Slot, element: Element) -> Result<(), HostError> {
        match slot {
            Slot::Main => {
                self.document.blocks.push(Block::Element { element });
                Ok(())
            }
            Slot::Column { block, index } => match self.document.blocks.get_mut(block) {
                Some(Block::Columns { columns, .. }) => {
                    let column = columns.get_mut(index).ok_or(HostError::UnknownSlot(index))?;
                    column.push(element);
                    Ok(())
                }
                _ => Err(HostError::UnknownSlot(block)),
            },
        }
    }
}

impl Host for HtmlHost {
    fn configure_page(&mut self, config: &PageConfig) -> Result<(), HostError> {
        if self.document.config.is_some() {
            return Err(HostError::AlreadyConfigured);
        }
        self.document.config = Some(config.clone());
        Ok(())
    }

    fn emit_style(&mut self, css: &str) -> Result<(), HostError> {
        self.require_configured("emit_style")?;
        self.document.styles.push(css.to_string());
        Ok(())
    }

    fn split_columns(&mut self, ratios: &[u32]) -> Result<Vec<Slot>, HostError> {
        self.require_configured("split_columns")?;
        if ratios.is_empty() || ratios.contains(&0) {
            return Err(HostError::InvalidColumns(ratios.to_vec()));
        }
        let block = self.document.blocks.len();
        self.document.blocks.push(Block::Columns {
            ratios: ratios.to_vec(),
            columns: vec![Vec::new(); ratios.len()],
        });
        Ok((0..ratios.len())
            .map(|index| Slot::Column { block, index })
            .collect())
    }

    fn emit_image(&mut self, slot: Slot, path: &Path, width_px: u32) -> Result<(), HostError> {
        self.require_configured("emit_image")?;
        let src = self
            .settings
            .asset_url(path)
            .ok_or_else(|| HostError::UnservableAsset(path.display().to_string()))?;
        self.place(
            slot,
            Element::Image {
                src,
                width: width_px,
            },
        )
    }

    fn emit_html(&mut self, slot: Slot, html: &str) -> Result<(), HostError> {
        self.require_configured("emit_html")?;
        self.place(
            slot,
            Element::Html {
                html: html.to_string(),
            },
        )
    }
}
