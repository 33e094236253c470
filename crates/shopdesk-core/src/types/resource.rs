//! The remote collections the console talks to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::EndpointsConfig;
use crate::error::AppError;

/// A remote collection endpoint, one per table in the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Users (subjects).
    Users,
    /// Products.
    Products,
    /// Orders.
    Orders,
    /// Order line items.
    OrderLines,
    /// Payments.
    Payments,
    /// Shopping carts.
    Carts,
    /// Shopping cart items.
    CartItems,
    /// Favorites.
    Favorites,
    /// Payment methods.
    PaymentMethods,
    /// Reports.
    Reports,
}

impl Resource {
    /// Every resource, in display order.
    pub const ALL: [Resource; 10] = [
        Self::Users,
        Self::Products,
        Self::Orders,
        Self::OrderLines,
        Self::Payments,
        Self::Carts,
        Self::CartItems,
        Self::Favorites,
        Self::PaymentMethods,
        Self::Reports,
    ];

    /// Resolve the collection path from configuration.
    pub fn collection_path<'a>(&self, endpoints: &'a EndpointsConfig) -> &'a str {
        match self {
            Self::Users => &endpoints.users,
            Self::Products => &endpoints.products,
            Self::Orders => &endpoints.orders,
            Self::OrderLines => &endpoints.order_lines,
            Self::Payments => &endpoints.payments,
            Self::Carts => &endpoints.carts,
            Self::CartItems => &endpoints.cart_items,
            Self::Favorites => &endpoints.favorites,
            Self::PaymentMethods => &endpoints.payment_methods,
            Self::Reports => &endpoints.reports,
        }
    }

    /// Resolve the path of a single item in the collection.
    pub fn item_path(&self, endpoints: &EndpointsConfig, id: i64) -> String {
        format!(
            "{}/{}",
            self.collection_path(endpoints).trim_end_matches('/'),
            id
        )
    }

    /// Return the resource as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::OrderLines => "order_lines",
            Self::Payments => "payments",
            Self::Carts => "carts",
            Self::CartItems => "cart_items",
            Self::Favorites => "favorites",
            Self::PaymentMethods => "payment_methods",
            Self::Reports => "reports",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| AppError::validation(format!("Unknown resource: '{s}'")))
    }
}
