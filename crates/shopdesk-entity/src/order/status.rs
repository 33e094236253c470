//! Order fulfilment status vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fulfilment status of an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Received, not yet processed (`pendiente`).
    Pending,
    /// Being prepared (`preparacion`).
    Preparing,
    /// Handed to the carrier (`enviado`).
    Shipped,
    /// Received by the customer (`entregado`).
    Delivered,
    /// Any other value.
    Other(String),
}

impl OrderStatus {
    /// Every known status in fulfilment order.
    pub const KNOWN: [OrderStatus; 4] = [
        Self::Pending,
        Self::Preparing,
        Self::Shipped,
        Self::Delivered,
    ];

    /// Return the value written to the API.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pendiente",
            Self::Preparing => "preparacion",
            Self::Shipped => "enviado",
            Self::Delivered => "entregado",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Preparing => "Preparing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Other(raw) if raw.is_empty() => "Unknown",
            Self::Other(raw) => raw,
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pendiente" | "pending" => Self::Pending,
            "preparacion" | "en preparacion" | "preparing" => Self::Preparing,
            "enviado" | "shipped" => Self::Shipped,
            "entregado" | "delivered" => Self::Delivered,
            _ => Self::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl FromStr for OrderStatus {
    type Err = shopdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match OrderStatus::from(s.to_string()) {
            OrderStatus::Other(_) => Err(shopdesk_core::AppError::validation(format!(
                "Invalid order status: '{s}'. Expected one of: pending, preparing, shipped, delivered"
            ))),
            known => Ok(known),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
