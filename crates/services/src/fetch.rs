//! Read-side fetch helper shared by every collection the UI loads.
//!
//! Read failures never reach the user. They are logged here and the caller
//! keeps whatever collection it already had.

use std::future::Future;

use storage::{Endpoint, StorageError};

/// Result of a collection read.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome<T> {
    /// The server answered with a parsed collection, in server order.
    Fetched(Vec<T>),
    /// The read failed. The failure has already been logged.
    Unchanged,
}

impl<T> FetchOutcome<T> {
    /// Replace `target` with the fetched collection.
    ///
    /// Returns `true` when `target` was replaced. `Unchanged` leaves it alone.
    pub fn apply_to(self, target: &mut Vec<T>) -> bool {
        match self {
            FetchOutcome::Fetched(items) => {
                *target = items;
                true
            }
            FetchOutcome::Unchanged => false,
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<Vec<T>> {
        match self {
            FetchOutcome::Fetched(items) => Some(items),
            FetchOutcome::Unchanged => None,
        }
    }
}

/// Await a collection read and normalize its failure.
///
/// No retries are attempted.
pub async fn fetch_collection<T, F>(endpoint: Endpoint, request: F) -> FetchOutcome<T>
where
    F: Future<Output = Result<Vec<T>, StorageError>>,
{
    match request.await {
        Ok(items) => {
            tracing::debug!(endpoint = endpoint.path(), count = items.len(), "fetched collection");
            FetchOutcome::Fetched(items)
        }
        Err(err) => {
            tracing::warn!(endpoint = endpoint.path(), error = %err, "collection fetch failed");
            FetchOutcome::Unchanged
        }
    }
}
