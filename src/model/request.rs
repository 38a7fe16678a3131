//! Fetch requests emitted by section loaders and the responses fed back to them

use serde_json::Value;

use super::catalog_client::FetchError;

/// Monotonic per-loader request tag. Only the latest token may settle a loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Which loader of a section a request belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    Items,
    Taxonomy,
}

/// A network call a section wants performed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub kind: FetchKind,
    pub token: RequestToken,
    pub endpoint: String,
}

/// The settled outcome of a [`FetchRequest`], addressed to one section
#[derive(Debug)]
pub struct FetchResponse {
    pub section: usize,
    pub kind: FetchKind,
    pub token: RequestToken,
    pub result: Result<Value, FetchError>,
}
