//! Loading State
//!
//! Explicit tagged state for anything fetched on mount, so a failed fetch
//! is never mistaken for an empty result.

use std::future::Future;

use crate::error::ApiResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    /// Nothing requested yet
    Idle,
    Loading,
    Loaded(T),
    /// Fetch failed; holds a displayable reason
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Idle
    }
}

impl<T> Loadable<T> {
    /// Convert a call result, logging the failure under the view's tag.
    pub fn from_result(view: &str, result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(err) => {
                log::warn!("[{}] load failed: {}", view, err);
                Loadable::Failed(err.to_string())
            }
        }
    }

    /// Idle counts as pending: the fetch fires on mount.
    pub fn is_pending(&self) -> bool {
        matches!(self, Loadable::Idle | Loadable::Loading)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Loadable::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Await one fetch and fold it into a [`Loadable`].
pub async fn load<T, F>(view: &str, fetch: F) -> Loadable<T>
where
    F: Future<Output = ApiResult<T>>,
{
    Loadable::from_result(view, fetch.await)
}
