//! Payment entity model.

use serde::{Deserialize, Serialize};

use crate::record::RemoteRecord;

/// A payment as served by the `payments` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique payment identifier.
    #[serde(rename = "id_pago", alias = "id")]
    pub id: i64,
    /// Paid order.
    #[serde(rename = "id_pedido", alias = "order_id", default)]
    pub order_id: Option<i64>,
    /// Amount charged.
    #[serde(rename = "monto", alias = "amount", default)]
    pub amount: Option<f64>,
    /// Payment method used.
    #[serde(rename = "id_metodo", alias = "payment_method_id", default)]
    pub payment_method_id: Option<i64>,
    /// Settlement status as sent by the API.
    #[serde(rename = "estado", alias = "status", default)]
    pub status: Option<String>,
    /// Payment timestamp as sent by the API.
    #[serde(rename = "fecha_pago", alias = "paid_at", default)]
    pub paid_at: Option<String>,
    /// Fields not modeled here.
    #[serde(flatten)]
    pub extra: RemoteRecord,
}

impl Payment {
    /// Amount charged, treating a missing value as zero.
    pub fn amount(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}
