//! HTTP error response mapping.

use askama::Template;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

use kpiscorer_domain::error::KpiScorerError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn status_of(err: &KpiScorerError) -> StatusCode {
    match err {
        KpiScorerError::Validation(_) => StatusCode::BAD_REQUEST,
        KpiScorerError::Host(_) | KpiScorerError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps [`KpiScorerError`] to a JSON response.
pub struct ApiError(KpiScorerError);

impl From<KpiScorerError> for ApiError {
    fn from(err: KpiScorerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        let message = if status.is_server_error() {
            tracing::error!(error = %self.0, source = ?self.0, "page render failed");
            "internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Minimal HTML error page.
#[derive(Template)]
#[template(
    source = "<!DOCTYPE html><title>{{ reason }}</title><p>{{ reason }}</p>",
    ext = "html"
)]
struct ErrorPage<'a> {
    reason: &'a str,
}

/// Maps [`KpiScorerError`] to a minimal HTML error page.
pub struct DashboardError(KpiScorerError);

impl From<KpiScorerError> for DashboardError {
    fn from(err: KpiScorerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = status_of(&self.0);
        tracing::error!(error = %self.0, source = ?self.0, "dashboard render failed");
        let page = ErrorPage {
            reason: status.canonical_reason().unwrap_or("Error"),
        };
        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => status.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kpiscorer_domain::error::{HostError, ValidationError};

    #[test]
    fn should_map_host_failure_to_internal_error() {
        let err: KpiScorerError = HostError::AlreadyConfigured.into();
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_map_template_failure_to_internal_error() {
        let err = KpiScorerError::Template(Box::new(std::fmt::Error));
        let resp = DashboardError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_render_reason_in_error_page() {
        let body = ErrorPage {
            reason: "Bad Request",
        }
        .render()
        .unwrap();
        assert_eq!(
            body,
            "<!DOCTYPE html><title>Bad Request</title><p>Bad Request</p>"
        );
    }

    #[test]
    fn should_map_validation_to_bad_request() {
        let err: KpiScorerError = ValidationError::Empty { field: "heading" }.into();
        let resp = DashboardError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
