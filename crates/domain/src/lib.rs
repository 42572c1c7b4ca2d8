//! # kpiscorer-domain
//!
//! Pure domain model for the KPI scorer dashboard chrome.
//!
//! ## Responsibilities
//! - Fixed **branding** strings (page title, heading, subtitle)
//! - **Page configuration** (title, icon, layout) applied before any rendering
//! - The brand **stylesheet** (four rules, rendered to CSS)
//! - The **logo asset path** and the header layout constants
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO.
//! Rendering capabilities are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod branding;
pub mod header;
pub mod logo;
pub mod page;
pub mod theme;
