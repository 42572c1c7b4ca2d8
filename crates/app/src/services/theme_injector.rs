//! Theme injector — emits the brand stylesheet.

use kpiscorer_domain::error::KpiScorerError;
use kpiscorer_domain::theme::Stylesheet;

use crate::ports::Host;

/// Injects a stylesheet into the page.
pub struct ThemeInjector {
    css: String,
}

impl ThemeInjector {
    /// Pre-render `stylesheet` once; every injection reuses the text.
    #[must_use]
    pub fn new(stylesheet: &Stylesheet) -> Self {
        Self {
            css: stylesheet.to_css(),
        }
    }

    /// Emit the stylesheet.
    ///
    /// # Errors
    ///
    /// Returns [`KpiScorerError::Host`] if the host rejects the style, e.g.
    /// because the page has not been configured yet.
    pub fn inject<H: Host>(&self, host: &mut H) -> Result<(), KpiScorerError> {
        host.emit_style(&self.css)?;
        Ok(())
    }
}

impl Default for ThemeInjector {
    fn default() -> Self {
        Self::new(&Stylesheet::brand())
    }
}
