//! Dashboard bootstrap — page config, theme and header, in that order.

use kpiscorer_domain::branding::Branding;
use kpiscorer_domain::error::KpiScorerError;
use kpiscorer_domain::logo::LogoAssetPath;
use kpiscorer_domain::theme::Stylesheet;

use crate::ports::{AssetLocator, Host};
use crate::services::header_renderer::{HeaderOutcome, HeaderRenderer};
use crate::services::page_configurer::PageConfigurer;
use crate::services::theme_injector::ThemeInjector;

/// Summary of one bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    pub header: HeaderOutcome,
}

/// Runs the page chrome against a host. Re-run in full on every render.
pub struct DashboardBootstrap<P> {
    page: PageConfigurer,
    theme: ThemeInjector,
    header: HeaderRenderer<P>,
}

impl<P: AssetLocator> DashboardBootstrap<P> {
    /// Assemble the bootstrap from its three components.
    pub fn new(page: PageConfigurer, theme: ThemeInjector, header: HeaderRenderer<P>) -> Self {
        Self {
            page,
            theme,
            header,
        }
    }

    /// The dashboard with the default branding and brand theme.
    ///
    /// # Errors
    ///
    /// Returns [`KpiScorerError::Validation`] if `branding` breaks its
    /// invariants, or [`KpiScorerError::Template`] if the header markup
    /// cannot be rendered.
    pub fn with_branding(
        branding: &Branding,
        logo: LogoAssetPath,
        locator: P,
    ) -> Result<Self, KpiScorerError> {
        branding.validate()?;
        Ok(Self::new(
            PageConfigurer::new(branding),
            ThemeInjector::new(&Stylesheet::brand()),
            HeaderRenderer::new(branding, logo, locator)?,
        ))
    }

    /// Configure the page, inject the theme, then draw the header.
    ///
    /// # Errors
    ///
    /// Returns the first [`KpiScorerError::Host`] raised; later steps are not run.
    pub fn run<H: Host>(&self, host: &mut H) -> Result<BootstrapReport, KpiScorerError> {
        self.page.apply(host)?;
        self.theme.inject(host)?;
        let header = self.header.render(host)?;
        tracing::trace!(?header, "dashboard bootstrap complete");
        Ok(BootstrapReport { header })
    }
}
