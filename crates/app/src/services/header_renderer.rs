//! Header renderer — logo column plus the brand-wrap title block.

use askama::Template;

use kpiscorer_domain::branding::Branding;
use kpiscorer_domain::error::{HostError, KpiScorerError};
use kpiscorer_domain::header::{COLUMN_RATIO, LOGO_WIDTH_PX};
use kpiscorer_domain::logo::LogoAssetPath;

use crate::ports::{AssetLocator, Host};

/// What the header renderer drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderOutcome {
    /// Logo and brand-wrap block were emitted side by side.
    Rendered,
    /// The logo file was absent, so the whole header was skipped.
    LogoMissing,
}

/// Brand-wrap block holding the heading and subtitle.
#[derive(Template)]
#[template(
    source = r#"<div class="brand-wrap"><div><h1>{{ heading }}</h1><p>{{ subtitle }}</p></div></div>"#,
    ext = "html"
)]
struct BrandBlock<'a> {
    heading: &'a str,
    subtitle: &'a str,
}

/// Draws the dashboard header when the logo is on disk.
pub struct HeaderRenderer<P> {
    logo: LogoAssetPath,
    brand_html: String,
    locator: P,
}

impl<P: AssetLocator> HeaderRenderer<P> {
    /// Create a renderer for `branding` with the logo at `logo`.
    ///
    /// # Errors
    ///
    /// Returns [`KpiScorerError::Template`] if the brand-wrap block cannot be
    /// rendered.
    pub fn new(branding: &Branding, logo: LogoAssetPath, locator: P) -> Result<Self, KpiScorerError> {
        let brand_html = BrandBlock {
            heading: &branding.heading,
            subtitle: &branding.subtitle,
        }
        .render()
        .map_err(|err| KpiScorerError::Template(Box::new(err)))?;

        Ok(Self {
            logo,
            brand_html,
            locator,
        })
    }

    /// Render the header.
    ///
    /// Logo existence is checked on every call. A missing logo is not an
    /// error: nothing is emitted and [`HeaderOutcome::LogoMissing`] is returned.
    ///
    /// # Errors
    ///
    /// Returns [`KpiScorerError::Host`] if any rendering call fails.
    pub fn render<H: Host>(&self, host: &mut H) -> Result<HeaderOutcome, KpiScorerError> {
        if !self.locator.exists(self.logo.as_path()) {
            tracing::debug!(logo = %self.logo.as_path().display(), "logo not found, skipping header");
            return Ok(HeaderOutcome::LogoMissing);
        }

        let columns = host.split_columns(&COLUMN_RATIO)?;
        let [logo_slot, title_slot] = columns[..] else {
            return Err(HostError::InvalidColumns(COLUMN_RATIO.to_vec()).into());
        };
        host.emit_image(logo_slot, self.logo.as_path(), LOGO_WIDTH_PX)?;
        host.emit_html(title_slot, &self.brand_html)?;
        Ok(HeaderOutcome::Rendered)
    }
}
