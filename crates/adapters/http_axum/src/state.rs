//! Shared application state for axum handlers.

use std::sync::Arc;

use kpiscorer_app::ports::AssetLocator;
use kpiscorer_app::services::bootstrap::DashboardBootstrap;
use kpiscorer_app::services::header_renderer::HeaderOutcome;
use kpiscorer_domain::error::KpiScorerError;

use crate::host::{HostSettings, HtmlHost, PageDocument};

/// Application state shared across all axum handlers.
///
/// Generic over the asset locator to avoid dynamic dispatch. `Clone` is
/// implemented manually so the locator itself does not need to be `Clone`;
/// only the `Arc` wrappers are cloned.
pub struct AppState<P> {
    /// Page chrome, re-run on every request.
    pub bootstrap: Arc<DashboardBootstrap<P>>,
    /// Where the host may serve images from.
    pub host_settings: Arc<HostSettings>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            bootstrap: Arc::clone(&self.bootstrap),
            host_settings: Arc::clone(&self.host_settings),
        }
    }
}

impl<P> AppState<P>
where
    P: AssetLocator + Send + Sync + 'static,
{
    /// Create a new application state.
    pub fn new(bootstrap: DashboardBootstrap<P>, host_settings: HostSettings) -> Self {
        Self {
            bootstrap: Arc::new(bootstrap),
            host_settings: Arc::new(host_settings),
        }
    }

    /// Run the bootstrap into a fresh [`HtmlHost`] and return what it drew.
    ///
    /// # Errors
    ///
    /// Returns [`KpiScorerError::Host`] when the host rejects a call.
    pub fn render_document(&self) -> Result<PageDocument, KpiScorerError> {
        let mut host = HtmlHost::new(Arc::clone(&self.host_settings));
        let report = self.bootstrap.run(&mut host)?;
        if report.header == HeaderOutcome::LogoMissing {
            tracing::debug!("rendered page without header");
        }
        Ok(host.into_document())
    }
}
