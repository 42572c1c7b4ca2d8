//! # kpiscorer-adapter-http-axum
//!
//! Host adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Implement the `Host` port as [`host::HtmlHost`], which turns rendering
//!   calls into a [`host::PageDocument`]
//! - Implement the `AssetLocator` port against the local filesystem
//! - Serve a **server-side-rendered HTML page** at `/`, re-running the whole
//!   bootstrap on every request
//! - Serve the same page as JSON at `/api/page`, the logo under `/assets`,
//!   and a health check
//!
//! ## Dependency rule
//! Depends on `kpiscorer-app` (port traits and services) and
//! `kpiscorer-domain`. Never leaks axum types into the domain.

pub mod api;
pub mod assets;
pub mod dashboard;
pub mod error;
pub mod host;
pub mod router;
pub mod state;
