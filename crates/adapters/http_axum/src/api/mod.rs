//! JSON API handlers.

pub mod page;

use axum::Router;
use axum::routing::get;

use kpiscorer_app::ports::AssetLocator;

use crate::state::AppState;

/// Build the API sub-router (mounted under `/api`).
pub fn routes<P>() -> Router<AppState<P>>
where
    P: AssetLocator + Send + Sync + 'static,
{
    Router::new().route("/page", get(page::show::<P>))
}
