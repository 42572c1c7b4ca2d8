//! Page configurer — the first call of every render.

use kpiscorer_domain::branding::Branding;
use kpiscorer_domain::error::KpiScorerError;
use kpiscorer_domain::page::PageConfig;

use crate::ports::Host;

/// Applies the page title, icon and layout to a host.
pub struct PageConfigurer {
    config: PageConfig,
}

impl PageConfigurer {
    /// Create a configurer for the dashboard's wide, padlock-iconed page.
    #[must_use]
    pub fn new(branding: &Branding) -> Self {
        Self {
            config: PageConfig::for_branding(branding),
        }
    }

    /// Configure the page. Must precede every other call on `host`.
    ///
    /// # Errors
    ///
    /// Returns [`KpiScorerError::Host`] if the host refuses the configuration.
    pub fn apply<H: Host>(&self, host: &mut H) -> Result<(), KpiScorerError> {
        host.configure_page(&self.config)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{Call, RecordingHost};
    use kpiscorer_domain::error::HostError;
    use kpiscorer_domain::page::Layout;

    #[test]
    fn should_configure_title_icon_and_wide_layout() {
        let mut host = RecordingHost::default();
        PageConfigurer::new(&Branding::default())
            .apply(&mut host)
            .unwrap();

        assert_eq!(
            host.calls,
            vec![Call::ConfigurePage(PageConfig {
                title: "KPI Scorer – Định Hóa (Full Suite)".to_string(),
                icon: "🔐".to_string(),
                layout: Layout::Wide,
            })]
        );
    }

    #[test]
    fn should_surface_host_refusal_of_second_configuration() {
        let mut host = RecordingHost::default();
        let configurer = PageConfigurer::new(&Branding::default());
        configurer.apply(&mut host).unwrap();

        let result = configurer.apply(&mut host);
        assert!(matches!(
            result,
            Err(KpiScorerError::Host(HostError::AlreadyConfigured))
        ));
    }
}
