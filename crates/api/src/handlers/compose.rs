//! Handlers for the compose generator tool API.
//!
//! The generator itself is a pure library (`devfolio_core::compose`); these
//! endpoints expose it statelessly, building a fresh selection per request.

use axum::response::IntoResponse;
use axum::Json;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use devfolio_core::catalog;
use devfolio_core::compose::{ComposeSelection, ServiceUpdate};

use crate::error::AppResult;
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Catalog entry as presented to clients (environment as an ordered map).
#[derive(Debug, Serialize)]
pub struct TemplateView {
    pub key: &'static str,
    pub default_name: &'static str,
    pub image: &'static str,
    pub ports: &'static [&'static str],
    pub environment: IndexMap<&'static str, &'static str>,
    pub volumes: &'static [&'static str],
}

/// One requested service: a catalog template key plus optional overrides.
#[derive(Debug, Deserialize)]
pub struct ServiceRequest {
    pub template: String,
    pub name: Option<String>,
    pub ports: Option<Vec<String>>,
    pub environment: Option<IndexMap<String, String>>,
    pub volumes: Option<Vec<String>>,
}

/// Body for `POST /compose/render`.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub project_name: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceRequest>,
}

/// Rendered document payload.
#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub content: String,
}

// ---------------------------------------------------------------------------
// GET /compose/templates
// ---------------------------------------------------------------------------

/// List the service template catalog.
pub async fn list_templates() -> AppResult<impl IntoResponse> {
    let templates: Vec<TemplateView> = catalog::TEMPLATES
        .iter()
        .map(|t| TemplateView {
            key: t.key,
            default_name: t.default_name,
            image: t.image,
            ports: t.ports,
            environment: t.environment.iter().copied().collect(),
            volumes: t.volumes,
        })
        .collect();
    Ok(Json(DataResponse::new(templates)))
}

// ---------------------------------------------------------------------------
// POST /compose/render
// ---------------------------------------------------------------------------

/// Render a compose document from the requested selection.
///
/// Unknown template keys are skipped, matching the generator's no-op
/// semantics; there is no error path here.
pub async fn render(Json(input): Json<RenderRequest>) -> AppResult<impl IntoResponse> {
    let mut selection = match input.project_name.as_deref() {
        Some(name) => ComposeSelection::new(name),
        None => ComposeSelection::default(),
    };

    let mut skipped = 0usize;
    for request in input.services {
        match selection.add_service(&request.template) {
            Some(id) => selection.update_service(
                id,
                ServiceUpdate {
                    name: request.name,
                    ports: request.ports,
                    environment: request.environment,
                    volumes: request.volumes,
                },
            ),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "Ignored unknown template keys");
    }

    Ok(Json(DataResponse::new(RenderResponse {
        content: selection.render(),
    })))
}
