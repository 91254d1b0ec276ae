//! Source loading for the detail view.

use std::collections::HashMap;
use std::rc::Rc;

use gloo::net::http::Request;

use crate::model::ComponentKind;
use crate::registry::{Registry, RegistryError, RegistryResponse};

/// Where source text comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceBackend {
    /// The registry compiled into this bundle.
    Local(Registry),
    /// A deployed registry reachable over HTTP.
    Remote { base_url: String },
}

impl SourceBackend {
    pub fn from_base_url(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => SourceBackend::Remote {
                base_url: url.trim_end_matches('/').to_string(),
            },
            None => SourceBackend::Local(Registry),
        }
    }

    pub fn route(id: &str) -> String {
        format!("/api/registry/{}", id)
    }

    pub async fn fetch(&self, id: &str) -> Result<String, RegistryError> {
        let started = js_sys::Date::now();
        let result = match self {
            SourceBackend::Local(registry) => {
                let resp = registry.handle_request(&Self::route(id));
                RegistryResponse::from_parts(resp.status, &resp.to_json(), id)
            }
            SourceBackend::Remote { base_url } => fetch_remote(base_url, id).await,
        };
        match &result {
            Ok(code) => log::debug!(
                "source {} loaded ({} bytes, {:.0}ms)",
                id,
                code.len(),
                js_sys::Date::now() - started
            ),
            Err(e) => log::error!("loading source for {} failed: {}", id, e),
        }
        result
    }
}

async fn fetch_remote(base_url: &str, id: &str) -> Result<String, RegistryError> {
    let url = format!("{}{}", base_url, SourceBackend::route(id));
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| RegistryError::FetchFailure(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| RegistryError::FetchFailure(e.to_string()))?;
    RegistryResponse::from_parts(status, &body, id)
}

#[derive(Clone, Debug, PartialEq)]
pub enum SourceState {
    Loading,
    Loaded(Rc<str>),
    Failed(RegistryError),
}

/// Successfully fetched sources, so reopening a component does not refetch.
/// Failures are not kept; the next open retries.
#[derive(Debug, Default)]
pub struct SourceCache {
    entries: HashMap<ComponentKind, Rc<str>>,
}

impl SourceCache {
    pub fn get(&self, kind: ComponentKind) -> Option<Rc<str>> {
        self.entries.get(&kind).cloned()
    }

    pub fn insert(&mut self, kind: ComponentKind, code: &str) -> Rc<str> {
        let code: Rc<str> = Rc::from(code);
        self.entries.insert(kind, code.clone());
        code
    }

    /// State to show immediately on open; `None` means a fetch must be started.
    pub fn lookup(&self, kind: ComponentKind) -> Option<SourceState> {
        self.get(kind).map(SourceState::Loaded)
    }

    pub fn record(&mut self, kind: ComponentKind, result: Result<String, RegistryError>) -> SourceState {
        match result {
            Ok(code) => SourceState::Loaded(self.insert(kind, &code)),
            Err(e) => SourceState::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_selects_backend() {
        assert_eq!(SourceBackend::from_base_url(None), SourceBackend::Local(Registry));
        assert_eq!(SourceBackend::from_base_url(Some("  ")), SourceBackend::Local(Registry));
        assert_eq!(
            SourceBackend::from_base_url(Some("https://ui.example.dev/")),
            SourceBackend::Remote {
                base_url: "https://ui.example.dev".into()
            }
        );
    }

    #[test]
    fn cache_keeps_successes_only() {
        let mut cache = SourceCache::default();
        let kind = ComponentKind::FaqAccordion;
        assert_eq!(cache.lookup(kind), None);

        let failed = cache.record(kind, Err(RegistryError::FetchFailure("offline".into())));
        assert!(matches!(failed, SourceState::Failed(_)));
        assert_eq!(cache.lookup(kind), None);

        let loaded = cache.record(kind, Registry.get_component_source(kind.id()));
        assert!(matches!(loaded, SourceState::Loaded(_)));
        assert_eq!(cache.lookup(kind), Some(loaded));
    }
}
