//! # kpiscorer-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Host` — the rendering capabilities of a dashboard runtime
//!     (configure page, emit style, split columns, emit image, emit html)
//!   - `AssetLocator` — best-effort existence checks for on-disk assets
//! - Define the **use-cases** run on every page render:
//!   - `PageConfigurer` — title, icon and layout, always first
//!   - `ThemeInjector` — the brand stylesheet
//!   - `HeaderRenderer` — logo + brand-wrap header, gated on the logo existing
//!   - `DashboardBootstrap` — runs the three in order
//!
//! ## Dependency rule
//! Depends on `kpiscorer-domain` (plus `askama` for the header markup).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
