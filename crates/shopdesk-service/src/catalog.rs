//! Collection loading shared by the services.

use serde::de::DeserializeOwned;
use tracing::warn;

use shopdesk_client::ResourceClient;
use shopdesk_core::error::AppError;
use shopdesk_core::types::Resource;

/// Fetch a whole collection, treating "no content" as empty.
pub async fn load_all<T: DeserializeOwned>(
    client: &ResourceClient,
    resource: Resource,
) -> Result<Vec<T>, AppError> {
    Ok(client.fetch_collection(resource).await?.unwrap_or_default())
}

/// Like [`load_all`], but a failure yields an empty list and a warning.
pub async fn load_all_or_empty<T: DeserializeOwned>(
    client: &ResourceClient,
    resource: Resource,
) -> Vec<T> {
    match load_all(client, resource).await {
        Ok(items) => items,
        Err(e) => {
            warn!(resource = %resource, error = %e, "Failed to load collection, continuing without it");
            Vec::new()
        }
    }
}

/// Decode the record the API echoes back after a create.
///
/// A missing echo is `None`. An echo that does not decode is logged and
/// also `None`, since the create itself succeeded.
pub fn decode_created<T: DeserializeOwned>(
    resource: Resource,
    echo: Option<serde_json::Value>,
) -> Option<T> {
    match serde_json::from_value(echo?) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(resource = %resource, error = %e, "Created record echo could not be decoded");
            None
        }
    }
}

/// Fetch one item, mapping "missing" and "no content" to `NotFound`.
pub async fn load_one<T: DeserializeOwned>(
    client: &ResourceClient,
    resource: Resource,
    id: i64,
    label: &str,
) -> Result<T, AppError> {
    client
        .fetch_one(resource, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("{label} {id} not found")))
}
