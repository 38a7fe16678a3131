//! Best-effort loader for a section's category set

use serde_json::Value;

use super::catalog_client::FetchError;
use super::decode::decode_categories;
use super::request::{FetchKind, FetchRequest, RequestToken};
use super::types::Category;

/// What a settled taxonomy request did to the category set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaxonomyOutcome {
    Stale,
    Loaded,
    Degraded,
}

#[derive(Default)]
pub struct TaxonomyLoader {
    categories: Vec<Category>,
    latest: RequestToken,
    endpoint: Option<String>,
}

impl TaxonomyLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn contains(&self, key: &str) -> bool {
        self.categories.iter().any(|c| c.key == key)
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Start a load. With no endpoint the set is emptied synchronously.
    pub fn begin(&mut self, endpoint: Option<&str>) -> Option<FetchRequest> {
        self.latest = self.latest.next();
        self.endpoint = endpoint.filter(|e| !e.is_empty()).map(str::to_string);

        match &self.endpoint {
            None => {
                self.categories.clear();
                None
            }
            Some(endpoint) => Some(FetchRequest {
                kind: FetchKind::Taxonomy,
                token: self.latest,
                endpoint: endpoint.clone(),
            }),
        }
    }

    /// Settle the request tagged `token`; failures degrade to an empty set.
    pub fn complete(&mut self, token: RequestToken, result: Result<Value, FetchError>) -> TaxonomyOutcome {
        if token != self.latest {
            tracing::debug!(
                stale = token.value(),
                latest = self.latest.value(),
                "Discarding superseded taxonomy response"
            );
            return TaxonomyOutcome::Stale;
        }

        match result {
            Ok(payload) => {
                self.categories = decode_categories(payload);
                tracing::debug!(count = self.categories.len(), "Taxonomy loaded");
                TaxonomyOutcome::Loaded
            }
            Err(e) => {
                tracing::warn!(error = %e, "Taxonomy fetch failed, continuing without categories");
                self.categories.clear();
                TaxonomyOutcome::Degraded
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_endpoint_issues_nothing() {
        let mut loader = TaxonomyLoader::new();
        assert!(loader.begin(None).is_none());
        assert!(loader.begin(Some("")).is_none());
        assert!(loader.categories().is_empty());
    }

    #[test]
    fn envelope_payload_loads() {
        let mut loader = TaxonomyLoader::new();
        let request = loader.begin(Some("/genres")).unwrap();
        let outcome = loader.complete(request.token, Ok(json!({"data": [{"key": "rock", "label": "Rock"}]})));
        assert_eq!(outcome, TaxonomyOutcome::Loaded);
        assert!(loader.contains("rock"));
    }

    #[test]
    fn failure_degrades_to_empty() {
        let mut loader = TaxonomyLoader::new();
        let first = loader.begin(Some("/genres")).unwrap();
        loader.complete(first.token, Ok(json!([{"key": "rock", "label": "Rock"}])));

        let second = loader.begin(Some("/genres")).unwrap();
        let outcome = loader.complete(
            second.token,
            Err(FetchError::Status { endpoint: "/genres".into(), status: 500 }),
        );
        assert_eq!(outcome, TaxonomyOutcome::Degraded);
        assert!(loader.categories().is_empty());
    }

    #[test]
    fn superseded_response_is_ignored() {
        let mut loader = TaxonomyLoader::new();
        let old = loader.begin(Some("/genres/v1")).unwrap();
        let new = loader.begin(Some("/genres/v2")).unwrap();
        loader.complete(new.token, Ok(json!([{"key": "jazz", "label": "Jazz"}])));
        let outcome = loader.complete(old.token, Ok(json!([{"key": "rock", "label": "Rock"}])));
        assert_eq!(outcome, TaxonomyOutcome::Stale);
        assert!(loader.contains("jazz"));
        assert!(!loader.contains("rock"));
    }
}
