//! Sales aggregation over order lines.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use shopdesk_client::ResourceClient;
use shopdesk_core::types::Resource;
use shopdesk_entity::{OrderLine, Product};

use crate::catalog::load_all;

/// A best-selling product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    /// Product id.
    pub product_id: i64,
    /// Product name.
    pub name: String,
    /// Units sold across all orders.
    pub units_sold: i64,
    /// Revenue from those units.
    pub revenue: f64,
}

/// Units sold per product id.
pub fn units_sold_by_product(lines: &[OrderLine]) -> HashMap<i64, i64> {
    let mut units = HashMap::new();
    for line in lines {
        *units.entry(line.product_id).or_insert(0) += line.units();
    }
    units
}

/// The `limit` products with the most units sold, best first.
///
/// Every product is ranked, so unsold products fill the list when fewer than
/// `limit` have sales. Lines for products no longer in the catalog are
/// ignored. Ties keep catalog order.
pub fn top_products(products: &[Product], lines: &[OrderLine], limit: usize) -> Vec<TopProduct> {
    let mut totals: HashMap<i64, (i64, f64)> = HashMap::new();
    for line in lines {
        let entry = totals.entry(line.product_id).or_insert((0, 0.0));
        entry.0 += line.units();
        entry.1 += line.amount();
    }

    let mut ranked: Vec<TopProduct> = products
        .iter()
        .map(|product| {
            let (units_sold, revenue) = totals.get(&product.id).copied().unwrap_or((0, 0.0));
            TopProduct {
                product_id: product.id,
                name: product.display_name(),
                units_sold,
                revenue,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
    ranked.truncate(limit);
    ranked
}

/// Load the order lines and rank `products` by them.
///
/// The ranking is empty when the order lines cannot be loaded.
pub async fn load_top_products(
    client: &ResourceClient,
    products: &[Product],
    limit: usize,
) -> Vec<TopProduct> {
    match load_all::<OrderLine>(client, Resource::OrderLines).await {
        Ok(lines) => top_products(products, &lines, limit),
        Err(e) => {
            warn!(error = %e, "Failed to load order lines, best sellers unavailable");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn line(product_id: i64, quantity: i64, unit_price: f64) -> OrderLine {
        serde_json::from_value(json!({
            "id_pedido": 1,
            "id_producto": product_id,
            "cantidad": quantity,
            "precio_unitario": unit_price
        }))
        .unwrap()
    }

    fn product(id: i64, name: &str) -> Product {
        serde_json::from_value(json!({"id_producto": id, "nombre": name})).unwrap()
    }

    #[test]
    fn test_ranks_by_units() {
        let products = vec![product(1, "Mug"), product(2, "Pen"), product(3, "Cap")];
        let lines = vec![line(1, 2, 5.0), line(2, 5, 1.0), line(1, 1, 5.0), line(3, 3, 10.0)];

        let top = top_products(&products, &lines, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "Pen");
        assert_eq!(top[0].units_sold, 5);
        assert_eq!(top[1].product_id, 1);
        assert_eq!(top[1].revenue, 15.0);
    }

    #[test]
    fn test_unsold_products_fill_ranking() {
        let products = vec![product(1, "Mug"), product(2, "Pen"), product(3, "Cap")];
        let lines = vec![line(3, 1, 2.0), line(9, 50, 1.0)];

        let top = top_products(&products, &lines, 5);
        let ids: Vec<i64> = top.iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(top[1].units_sold, 0);
        assert_eq!(top[1].revenue, 0.0);
    }

    #[test]
    fn test_units_by_product() {
        let units = units_sold_by_product(&[line(1, 2, 1.0), line(1, 3, 1.0), line(2, 1, 1.0)]);
        assert_eq!(units[&1], 5);
        assert_eq!(units[&2], 1);
    }
}
