//! Order entity model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::status::OrderStatus;
use crate::record::RemoteRecord;
use crate::time::parse_timestamp;

/// An order as served by the `orders` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    #[serde(rename = "id_pedido", alias = "id")]
    pub id: i64,
    /// Purchasing user.
    #[serde(rename = "id_usuario", alias = "user_id")]
    pub user_id: i64,
    /// Placement timestamp as sent by the API.
    #[serde(rename = "fecha_pedido", alias = "date", default)]
    pub placed_at: Option<String>,
    /// Order total.
    #[serde(default)]
    pub total: Option<f64>,
    /// Fulfilment status.
    #[serde(rename = "estado", alias = "status", default)]
    pub status: OrderStatus,
    /// Shipping address.
    #[serde(rename = "direccion_envio", alias = "shipping_address", default)]
    pub shipping_address: Option<String>,
    /// Payment method used.
    #[serde(rename = "id_metodo", alias = "payment_method_id", default)]
    pub payment_method_id: Option<i64>,
    /// Fields not modeled here, preserved for write-back.
    #[serde(flatten)]
    pub extra: RemoteRecord,
}

impl Order {
    /// The order total, treating a missing value as zero.
    pub fn amount(&self) -> f64 {
        self.total.unwrap_or(0.0)
    }

    /// Parsed placement time.
    pub fn placed_at_time(&self) -> Option<NaiveDateTime> {
        self.placed_at.as_deref().and_then(parse_timestamp)
    }
}
