//! Search and status filters for the admin listings.
//!
//! Searches are case-insensitive substring matches. A blank search matches
//! everything.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use shopdesk_core::error::AppError;
use shopdesk_entity::{Order, Product, User};

fn contains(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle))
}

fn normalized(search: &Option<String>) -> Option<String> {
    search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

/// Account status filter for the user listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatusFilter {
    /// Every user.
    #[default]
    All,
    /// Active users only.
    Active,
    /// Inactive users only.
    Inactive,
}

impl FromStr for UserStatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "active" | "activo" => Ok(Self::Active),
            "inactive" | "inactivo" => Ok(Self::Inactive),
            other => Err(AppError::validation(format!(
                "Invalid status filter: '{other}'. Expected one of: all, active, inactive"
            ))),
        }
    }
}

/// Filter for the user listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFilter {
    /// Matched against name, email, phone, role and address.
    pub search: Option<String>,
    /// Account status.
    pub status: UserStatusFilter,
}

impl UserFilter {
    /// Whether `user` passes the filter.
    pub fn matches(&self, user: &User) -> bool {
        let status_ok = match self.status {
            UserStatusFilter::All => true,
            UserStatusFilter::Active => user.status.is_active(),
            UserStatusFilter::Inactive => !user.status.is_active(),
        };
        if !status_ok {
            return false;
        }

        let Some(needle) = normalized(&self.search) else {
            return true;
        };
        contains(user.name.as_deref(), &needle)
            || contains(user.email.as_deref(), &needle)
            || contains(user.phone.as_deref(), &needle)
            || contains(Some(user.role.as_str()), &needle)
            || contains(Some(user.role.label()), &needle)
            || contains(user.address.as_deref(), &needle)
    }
}

/// Stock filter for the product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockFilter {
    /// Every product.
    #[default]
    All,
    /// At least one unit in stock.
    InStock,
    /// Nothing in stock.
    OutOfStock,
}

impl FromStr for StockFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "" | "all" => Ok(Self::All),
            "in_stock" => Ok(Self::InStock),
            "out_of_stock" => Ok(Self::OutOfStock),
            other => Err(AppError::validation(format!(
                "Invalid stock filter: '{other}'. Expected one of: all, in-stock, out-of-stock"
            ))),
        }
    }
}

impl fmt::Display for StockFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::InStock => write!(f, "in-stock"),
            Self::OutOfStock => write!(f, "out-of-stock"),
        }
    }
}

/// Filter for the product listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Matched against name and description.
    pub search: Option<String>,
    /// Stock level.
    pub stock: StockFilter,
}

impl ProductFilter {
    /// Whether `product` passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        let stock_ok = match self.stock {
            StockFilter::All => true,
            StockFilter::InStock => product.in_stock(),
            StockFilter::OutOfStock => !product.in_stock(),
        };
        if !stock_ok {
            return false;
        }

        let Some(needle) = normalized(&self.search) else {
            return true;
        };
        contains(product.name.as_deref(), &needle) || contains(product.description.as_deref(), &needle)
    }
}

/// Filter for the order listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Matched against the order id and the customer name.
    pub search: Option<String>,
    /// Status, in English or as the API spells it. `None` or `all` matches
    /// every order.
    pub status: Option<String>,
}

impl OrderFilter {
    /// The API status value the filter looks for.
    fn wire_status(&self) -> Option<String> {
        let raw = self.status.as_deref()?.trim().to_lowercase();
        let wire = match raw.as_str() {
            "" | "all" => return None,
            "pending" => "pendiente",
            "processing" | "preparing" => "preparacion",
            "shipped" => "enviado",
            "delivered" => "entregado",
            other => other,
        };
        Some(wire.to_string())
    }

    /// Whether `order`, placed by `customer`, passes the filter.
    pub fn matches(&self, order: &Order, customer: &str) -> bool {
        if let Some(wire) = self.wire_status() {
            if !order.status.as_str().to_lowercase().contains(&wire) {
                return false;
            }
        }

        let Some(needle) = normalized(&self.search) else {
            return true;
        };
        order.id.to_string().contains(&needle) || customer.to_lowercase().contains(&needle)
    }
}
