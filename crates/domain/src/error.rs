//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`KpiScorerError`] via `#[from]`.

/// Top-level error for the dashboard bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum KpiScorerError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A rendering call was refused by the host runtime.
    #[error("host runtime failure")]
    Host(#[from] HostError),

    /// Markup could not be produced from a template.
    #[error("template rendering failed")]
    Template(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("logo path must be absolute, got {0}")]
    RelativeLogoPath(String),
}

/// Failures raised by a host runtime while applying rendering calls.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// A rendering call arrived before the page was configured.
    #[error("`{call}` called before the page was configured")]
    NotConfigured { call: &'static str },

    #[error("page is already configured")]
    AlreadyConfigured,

    #[error("invalid column ratios {0:?}")]
    InvalidColumns(Vec<u32>),

    #[error("unknown layout slot {0}")]
    UnknownSlot(usize),

    /// The host cannot expose the file at this path to the browser.
    #[error("asset {0} is outside the served assets directory")]
    UnservableAsset(String),
}
