//! Server-side rendered HTML dashboard (no JavaScript).
//!
//! The page is rebuilt from scratch on every request: a fresh host receives
//! the page config, the theme and the header, then is rendered to HTML.

pub mod home;

use axum::Router;
use axum::routing::get;

use kpiscorer_app::ports::AssetLocator;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<P>() -> Router<AppState<P>>
where
    P: AssetLocator + Send + Sync + 'static,
{
    Router::new().route("/", get(home::index::<P>))
}
