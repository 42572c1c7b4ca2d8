//! `GET /api/page` — the rendered page as data.

use axum::Json;
use axum::extract::State;

use kpiscorer_app::ports::AssetLocator;

use crate::error::ApiError;
use crate::host::PageDocument;
use crate::state::AppState;

/// Re-run the bootstrap and return the resulting document.
///
/// # Errors
///
/// Returns [`ApiError`] when the host rejects a rendering call.
pub async fn show<P>(State(state): State<AppState<P>>) -> Result<Json<PageDocument>, ApiError>
where
    P: AssetLocator + Send + Sync + 'static,
{
    let document = state.render_document()?;
    Ok(Json(document))
}
