//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the host
//! runtime. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without circular dependencies.

pub mod assets;
pub mod host;

pub use assets::AssetLocator;
pub use host::{Host, Slot};
