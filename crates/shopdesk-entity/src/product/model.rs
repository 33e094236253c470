//! Product entity model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::record::RemoteRecord;

/// A product as served by the `products` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "id_producto", alias = "id")]
    pub id: i64,
    /// Product name.
    #[serde(rename = "nombre", alias = "name", default)]
    pub name: Option<String>,
    /// Long description.
    #[serde(rename = "descripcion", alias = "description", default)]
    pub description: Option<String>,
    /// Unit price.
    #[serde(rename = "precio", alias = "price", default)]
    pub price: f64,
    /// Units in stock.
    #[serde(default)]
    pub stock: i64,
    /// Category label.
    #[serde(rename = "categoria", alias = "category", default)]
    pub category: Option<String>,
    /// Image URL.
    #[serde(rename = "imagen", alias = "image", default)]
    pub image: Option<String>,
    /// Publication status as sent by the API.
    #[serde(rename = "estado", alias = "status", default)]
    pub status: Option<String>,
    /// Creation timestamp as sent by the API.
    #[serde(rename = "fecha_creacion", alias = "created_at", default)]
    pub created_at: Option<String>,
    /// Fields not modeled here, preserved for write-back.
    #[serde(flatten)]
    pub extra: RemoteRecord,
}

impl Product {
    /// Name for display, falling back to a synthetic label.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("Product {}", self.id),
        }
    }

    /// Check if at least one unit is available.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Editable product fields, used both to create and to update a product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductDraft {
    /// Product name.
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    /// Long description.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Unit price.
    #[serde(rename = "precio")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: f64,
    /// Units in stock.
    #[validate(range(min = 0, message = "must not be negative"))]
    pub stock: i64,
    /// Image URL. Blank means "keep the current one" on update.
    #[serde(rename = "imagen")]
    pub image: String,
    /// Category label; new products start uncategorized.
    #[serde(rename = "categoria")]
    pub category: String,
    /// Publication status; new products start active.
    #[serde(rename = "estado")]
    pub status: String,
}

impl ProductDraft {
    /// Create a draft with the defaults the API expects for new products.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            stock,
            image: String::new(),
            category: String::new(),
            status: "activo".to_string(),
        }
    }

    /// Overwrite the editable fields of an existing record.
    ///
    /// Category and status are not edited here; the image is kept when the
    /// draft leaves it blank.
    pub fn apply_to(&self, product: &mut Product) {
        product.name = Some(self.name.clone());
        product.description = Some(self.description.clone());
        product.price = self.price;
        product.stock = self.stock;
        if !self.image.trim().is_empty() {
            product.image = Some(self.image.clone());
        }
    }
}
