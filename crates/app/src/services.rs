//! Application services — use-case implementations.
//!
//! Each service receives the host it renders into as a generic argument, and
//! its own collaborators (asset locator) via constructor injection, keeping this
//! layer decoupled from concrete adapters.

pub mod bootstrap;
pub mod header_renderer;
pub mod page_configurer;
pub mod theme_injector;

#[cfg(test)]
pub(crate) mod testing;
