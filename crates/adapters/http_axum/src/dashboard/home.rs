//! Dashboard home page — page chrome rendered from a [`PageDocument`].

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use kpiscorer_app::ports::AssetLocator;
use kpiscorer_domain::error::KpiScorerError;
use kpiscorer_domain::page::{Layout, PageConfig};

use crate::error::DashboardError;
use crate::host::{Block, Element, PageDocument};
use crate::state::AppState;

/// `<img>` tag for an image element.
#[derive(Template)]
#[template(source = r#"<img src="{{ src }}" width="{{ width }}" alt="">"#, ext = "html")]
struct ImageTag<'a> {
    src: &'a str,
    width: u32,
}

/// One column of a row, `flex` wide relative to its siblings.
pub struct ColumnView {
    flex: u32,
    items: Vec<String>,
}

/// A row of the page body.
pub struct RowView {
    split: bool,
    columns: Vec<ColumnView>,
}

/// Full page template.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    title: String,
    icon: String,
    layout: Layout,
    max_width: &'static str,
    styles: Vec<String>,
    rows: Vec<RowView>,
}

impl PageTemplate {
    /// Build the view model for `document`.
    ///
    /// # Errors
    ///
    /// Returns [`KpiScorerError::Template`] if an element cannot be rendered.
    pub fn from_document(document: &PageDocument) -> Result<Self, KpiScorerError> {
        let config = document.config.clone().unwrap_or_else(|| PageConfig {
            title: String::new(),
            icon: String::new(),
            layout: Layout::default(),
        });
        let rows = document
            .blocks
            .iter()
            .map(row_view)
            .collect::<Result<_, _>>()
            .map_err(|err| KpiScorerError::Template(Box::new(err)))?;

        Ok(Self {
            max_width: config.layout.max_width(),
            layout: config.layout,
            title: config.title,
            icon: config.icon,
            styles: document.styles.clone(),
            rows,
        })
    }
}

/// Markup for one element. Raw HTML is passed through unescaped.
fn element_html(element: &Element) -> askama::Result<String> {
    match element {
        Element::Image { src, width } => ImageTag { src, width: *width }.render(),
        Element::Html { html } => Ok(html.clone()),
    }
}

fn row_view(block: &Block) -> askama::Result<RowView> {
    let row = match block {
        Block::Element { element } => RowView {
            split: false,
            columns: vec![ColumnView {
                flex: 1,
                items: vec![element_html(element)?],
            }],
        },
        Block::Columns { ratios, columns } => RowView {
            split: true,
            columns: ratios
                .iter()
                .zip(columns)
                .map(|(ratio, elements)| {
                    Ok(ColumnView {
                        flex: *ratio,
                        items: elements.iter().map(element_html).collect::<Result<_, _>>()?,
                    })
                })
                .collect::<askama::Result<_>>()?,
        },
    };
    Ok(row)
}

impl IntoResponse for PageTemplate {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(body) => Html(body).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "template render failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// `GET /` — the dashboard page.
pub async fn index<P>(State(state): State<AppState<P>>) -> Result<PageTemplate, DashboardError>
where
    P: AssetLocator + Send + Sync + 'static,
{
    let document = state.render_document()?;
    Ok(PageTemplate::from_document(&document)?)
}
