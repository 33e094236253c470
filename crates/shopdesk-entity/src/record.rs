//! Untyped record representation for collections the console does not model.

/// A generic field-name to value mapping as returned by a collection endpoint.
pub type RemoteRecord = serde_json::Map<String, serde_json::Value>;
