//! Order line entity model.

use serde::{Deserialize, Serialize};

use crate::record::RemoteRecord;

/// One product line of an order, from the `order_lines` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Line identifier.
    #[serde(rename = "id_detalle", alias = "id", default)]
    pub id: Option<i64>,
    /// Owning order.
    #[serde(rename = "id_pedido", alias = "order_id")]
    pub order_id: i64,
    /// Ordered product.
    #[serde(rename = "id_producto", alias = "product_id")]
    pub product_id: i64,
    /// Units ordered.
    #[serde(rename = "cantidad", alias = "quantity", default)]
    pub quantity: Option<i64>,
    /// Price per unit at the time of purchase.
    #[serde(rename = "precio_unitario", alias = "unit_price", default)]
    pub unit_price: Option<f64>,
    /// Line subtotal as stored by the API.
    #[serde(default)]
    pub subtotal: Option<f64>,
    /// Fields not modeled here.
    #[serde(flatten)]
    pub extra: RemoteRecord,
}

impl OrderLine {
    /// Units ordered, treating a missing value as zero.
    pub fn units(&self) -> i64 {
        self.quantity.unwrap_or(0)
    }

    /// Line amount: the stored subtotal, or quantity times unit price.
    pub fn amount(&self) -> f64 {
        self.subtotal
            .unwrap_or_else(|| self.units() as f64 * self.unit_price.unwrap_or(0.0))
    }
}
