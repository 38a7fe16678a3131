//! Result wrapper for an asynchronous collection fetch

use super::catalog_client::FetchError;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Success(Vec<T>),
    Error(FetchError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn items(&self) -> Option<&[T]> {
        match self {
            LoadState::Success(items) => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Error(err) => Some(err),
            _ => None,
        }
    }
}
