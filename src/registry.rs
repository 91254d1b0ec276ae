//! Code registry: component id -> metadata and source text.
//!
//! The registry is backed by the snippets compiled into the bundle, so lookups are
//! plain matches over a fixed table. [`Registry::handle_request`] exposes the same
//! lookups in the shape of the site's HTTP routes (`{ "code" }` / `{ "error" }` plus
//! a status code) so local and remote sources can be consumed the same way.
//! `/r/{id}.rs` answers with the bare source so install commands can download it
//! straight into a `.rs` file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::CatalogFilter;
use crate::model::{CATALOG, ComponentDescriptor, ComponentKind};
use crate::showcase;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("component not found: {0}")]
    NotFound(String),

    #[error("could not load source: {0}")]
    FetchFailure(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl RegistryError {
    /// HTTP status the route handlers answer with.
    pub fn status(&self) -> u16 {
        match self {
            RegistryError::NotFound(_) => 404,
            RegistryError::FetchFailure(_) => 500,
            RegistryError::BadRequest(_) => 400,
        }
    }

    /// Short text shown inline in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            RegistryError::NotFound(_) => "Component not found",
            RegistryError::FetchFailure(_) => "Could not load source",
            RegistryError::BadRequest(_) => "Invalid request",
        }
    }
}

/// Resolves string ids to renderable components.
pub trait ComponentProvider {
    fn resolve(&self, id: &str) -> Result<ComponentKind, RegistryError>;
}

/// Response body of the registry routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistryBody {
    Code { code: String },
    Error { error: String },
}

/// How a response body goes on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    /// Bare source text (or bare error text).
    Raw,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryResponse {
    pub status: u16,
    pub format: ResponseFormat,
    pub body: RegistryBody,
}

impl RegistryResponse {
    fn ok(code: String, format: ResponseFormat) -> Self {
        Self {
            status: 200,
            format,
            body: RegistryBody::Code { code },
        }
    }

    fn err(e: &RegistryError, format: ResponseFormat) -> Self {
        Self {
            status: e.status(),
            format,
            body: RegistryBody::Error {
                error: e.user_message().to_string(),
            },
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self.format {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Raw => "text/plain; charset=utf-8",
        }
    }

    /// Body as sent for this response's format.
    pub fn body_text(&self) -> String {
        match (self.format, &self.body) {
            (ResponseFormat::Json, _) => self.to_json(),
            (ResponseFormat::Raw, RegistryBody::Code { code }) => code.clone(),
            (ResponseFormat::Raw, RegistryBody::Error { error }) => error.clone(),
        }
    }

    pub fn to_json(&self) -> String {
        // Serializing two string-only variants cannot fail.
        serde_json::to_string(&self.body).unwrap_or_else(|_| String::from("{}"))
    }

    /// Interprets a status/body pair received over the wire.
    pub fn from_parts(status: u16, body: &str, id: &str) -> Result<String, RegistryError> {
        let parsed: RegistryBody = serde_json::from_str(body)
            .map_err(|e| RegistryError::FetchFailure(format!("invalid registry response: {}", e)))?;
        Self {
            status,
            format: ResponseFormat::Json,
            body: parsed,
        }
        .into_result(id)
    }

    pub fn into_result(self, id: &str) -> Result<String, RegistryError> {
        match (self.status, self.body) {
            (200, RegistryBody::Code { code }) => Ok(code),
            (404, _) => Err(RegistryError::NotFound(id.to_string())),
            (400, RegistryBody::Error { error }) => Err(RegistryError::BadRequest(error)),
            (status, RegistryBody::Error { error }) => Err(RegistryError::FetchFailure(format!(
                "status {}: {}",
                status, error
            ))),
            (status, RegistryBody::Code { .. }) => Err(RegistryError::FetchFailure(format!(
                "unexpected status {}",
                status
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registry;

impl Registry {
    /// Source text for `id`. Resolved on every call; nothing is cached here.
    pub fn get_component_source(&self, id: &str) -> Result<String, RegistryError> {
        let kind = self.resolve(id)?;
        Ok(showcase::source_text(kind).to_string())
    }

    /// Source text keyed by the snippet's file path instead of its id.
    pub fn get_source_by_path(&self, path: &str) -> Result<String, RegistryError> {
        CATALOG
            .iter()
            .find(|d| d.source_path == path)
            .map(|d| showcase::source_text(d.kind).to_string())
            .ok_or_else(|| RegistryError::NotFound(path.to_string()))
    }

    pub fn list_components(&self, filter: Option<&CatalogFilter>) -> Vec<&'static ComponentDescriptor> {
        CATALOG
            .iter()
            .filter(|d| filter.is_none_or(|f| f.matches(d)))
            .collect()
    }

    /// Answers one of the registry routes:
    /// `/api/registry/{id}`, `/r/{id}.json`, `/r/{id}.rs` or `/api/source/{path}`.
    pub fn handle_request(&self, path: &str) -> RegistryResponse {
        let path = path.split('?').next().unwrap_or_default();
        let mut format = ResponseFormat::Json;
        let result = if let Some(id) = path.strip_prefix("/api/registry/") {
            self.get_component_source(id)
        } else if let Some(rest) = path.strip_prefix("/r/") {
            if let Some(id) = rest.strip_suffix(".json") {
                self.get_component_source(id)
            } else if let Some(id) = rest.strip_suffix(".rs") {
                format = ResponseFormat::Raw;
                self.get_component_source(id)
            } else {
                Err(RegistryError::BadRequest(format!("expected .json or .rs: {}", path)))
            }
        } else if let Some(file) = path.strip_prefix("/api/source/") {
            self.get_source_by_path(file)
        } else {
            Err(RegistryError::BadRequest(format!("unknown route: {}", path)))
        };
        match result {
            Ok(code) => {
                log::debug!("registry {} -> 200 ({} bytes)", path, code.len());
                RegistryResponse::ok(code, format)
            }
            Err(e) => {
                log::warn!("registry {} -> {}: {}", path, e.status(), e);
                RegistryResponse::err(&e, format)
            }
        }
    }
}

impl ComponentProvider for Registry {
    fn resolve(&self, id: &str) -> Result<ComponentKind, RegistryError> {
        ComponentKind::from_id(id).ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SectionFilter;
    use crate::install::{InstallMethod, install_command};
    use crate::model::Section;

    #[test]
    fn source_lookup_is_stable() {
        let r = Registry;
        let a = r.get_component_source("hero-minimalism").unwrap();
        let b = r.get_component_source("hero-minimalism").unwrap();
        assert_eq!(a, b);
        assert!(a.contains("fn hero_minimalism"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let r = Registry;
        for _ in 0..2 {
            assert_eq!(
                r.get_component_source("does-not-exist"),
                Err(RegistryError::NotFound("does-not-exist".into()))
            );
        }
    }

    #[test]
    fn every_descriptor_path_serves_its_source() {
        let r = Registry;
        for d in CATALOG.iter() {
            assert_eq!(
                r.get_source_by_path(d.source_path).unwrap(),
                r.get_component_source(d.id).unwrap()
            );
        }
        assert!(r.get_source_by_path("../Cargo.toml").is_err());
    }

    #[test]
    fn list_applies_optional_filter() {
        let r = Registry;
        assert_eq!(r.list_components(None).len(), CATALOG.len());
        let f = CatalogFilter {
            query: "PRICING".into(),
            section: SectionFilter::Only(Section::Blocks),
        };
        let found = r.list_components(Some(&f));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "pricing-cards");
    }

    #[test]
    fn routes_map_to_status_codes() {
        let r = Registry;
        let ok = r.handle_request("/api/registry/faq-accordion");
        assert_eq!(ok.status, 200);
        assert!(ok.to_json().starts_with("{\"code\":"));

        assert_eq!(r.handle_request("/r/cta-split.json").status, 200);
        assert_eq!(r.handle_request("/r/cta-split.json?v=2").status, 200);
        assert_eq!(r.handle_request("/api/source/src/showcase/cta_split.rs").status, 200);

        let missing = r.handle_request("/api/registry/does-not-exist");
        assert_eq!(missing.status, 404);
        assert_eq!(missing.to_json(), "{\"error\":\"Component not found\"}");

        let bad = r.handle_request("/r/cta-split");
        assert_eq!(bad.status, 400);
        assert_eq!(bad.to_json(), "{\"error\":\"Invalid request\"}");
        assert_eq!(r.handle_request("/nope").status, 400);
    }

    #[test]
    fn raw_route_serves_bare_source() {
        let r = Registry;
        let resp = r.handle_request("/r/faq-accordion.rs");
        assert_eq!(resp.status, 200);
        assert_eq!(resp.content_type(), "text/plain; charset=utf-8");
        assert_eq!(resp.body_text(), showcase::source_text(ComponentKind::FaqAccordion));

        let missing = r.handle_request("/r/does-not-exist.rs");
        assert_eq!(missing.status, 404);
        assert_eq!(missing.body_text(), "Component not found");
    }

    #[test]
    fn download_commands_fetch_a_served_route() {
        let site = "https://ui.example.dev";
        let r = Registry;
        for d in CATALOG.iter() {
            for method in [InstallMethod::Curl, InstallMethod::Wget] {
                let cmd = install_command(d, method, site);
                let url = cmd
                    .split_whitespace()
                    .find(|w| w.starts_with(site))
                    .unwrap();
                let resp = r.handle_request(url.strip_prefix(site).unwrap());
                assert_eq!(resp.status, 200, "{}", cmd);
                assert_eq!(resp.body_text(), showcase::source_text(d.kind));
            }
        }
    }

    #[test]
    fn wire_parts_decode_into_results() {
        assert_eq!(
            RegistryResponse::from_parts(200, r#"{"code":"fn x() {}"}"#, "x"),
            Ok("fn x() {}".to_string())
        );
        assert_eq!(
            RegistryResponse::from_parts(404, r#"{"error":"Component not found"}"#, "x"),
            Err(RegistryError::NotFound("x".into()))
        );
        assert!(matches!(
            RegistryResponse::from_parts(500, r#"{"error":"boom"}"#, "x"),
            Err(RegistryError::FetchFailure(_))
        ));
        assert!(matches!(
            RegistryResponse::from_parts(200, "<html>", "x"),
            Err(RegistryError::FetchFailure(_))
        ));
    }

    #[test]
    fn provider_resolves_known_kinds() {
        assert_eq!(Registry.resolve("background-grid"), Ok(ComponentKind::BackgroundGrid));
        assert!(Registry.resolve("").is_err());
    }
}
