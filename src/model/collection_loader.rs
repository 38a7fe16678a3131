//! Token-guarded loader for a section's item collection

use serde_json::Value;

use super::catalog_client::FetchError;
use super::decode::decode_items;
use super::load_state::LoadState;
use super::request::{FetchKind, FetchRequest, RequestToken};
use super::types::{Item, SectionMode};

pub struct CollectionLoader {
    mode: SectionMode,
    state: LoadState<Item>,
    latest: RequestToken,
    endpoint: String,
}

impl CollectionLoader {
    pub fn new(mode: SectionMode) -> Self {
        Self {
            mode,
            state: LoadState::Idle,
            latest: RequestToken::default(),
            endpoint: String::new(),
        }
    }

    pub fn state(&self) -> &LoadState<Item> {
        &self.state
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Start a new fetch cycle. Every earlier in-flight request becomes stale.
    /// An empty endpoint parks the loader in `Idle` without issuing a request.
    pub fn begin(&mut self, endpoint: &str) -> Option<FetchRequest> {
        self.latest = self.latest.next();
        self.endpoint = endpoint.to_string();

        if endpoint.is_empty() {
            self.state = LoadState::Idle;
            return None;
        }

        self.state = LoadState::Loading;
        Some(FetchRequest {
            kind: FetchKind::Items,
            token: self.latest,
            endpoint: self.endpoint.clone(),
        })
    }

    /// Settle the request tagged `token`. Returns `false` if it was superseded.
    pub fn complete(&mut self, token: RequestToken, result: Result<Value, FetchError>) -> bool {
        if token != self.latest {
            tracing::debug!(
                stale = token.value(),
                latest = self.latest.value(),
                "Discarding superseded items response"
            );
            return false;
        }

        self.state = match result {
            Ok(payload) => LoadState::Success(decode_items(payload, self.mode)),
            Err(e) => {
                tracing::warn!(error = %e, "Items fetch failed");
                LoadState::Error(e)
            }
        };
        true
    }
}
