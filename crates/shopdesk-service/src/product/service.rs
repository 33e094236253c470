//! Product administration: listing with sales, editing and deletion.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use shopdesk_client::ResourceClient;
use shopdesk_core::error::AppError;
use shopdesk_core::types::{PageRequest, PageResponse, Resource};
use shopdesk_entity::{OrderLine, Product, ProductDraft};

use crate::catalog::{decode_created, load_all, load_all_or_empty, load_one};
use crate::context::AdminContext;
use crate::filter::ProductFilter;
use crate::sales::units_sold_by_product;

/// A product with its sales count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    /// The product.
    pub product: Product,
    /// Units sold across all orders.
    pub units_sold: i64,
}

/// Handles product administration.
#[derive(Debug, Clone)]
pub struct ProductService {
    /// API client.
    client: Arc<ResourceClient>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(client: Arc<ResourceClient>) -> Self {
        Self { client }
    }

    /// Lists products matching `filter` with units sold.
    ///
    /// Sales come from the order lines; if those cannot be loaded every
    /// product shows zero.
    pub async fn list(
        &self,
        ctx: &AdminContext,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<ProductRow>, AppError> {
        ctx.require_admin()?;

        let (products, lines) = futures::join!(
            load_all::<Product>(&self.client, Resource::Products),
            load_all_or_empty::<OrderLine>(&self.client, Resource::OrderLines),
        );
        let sold = units_sold_by_product(&lines);

        let rows: Vec<ProductRow> = products?
            .into_iter()
            .filter(|p| filter.matches(p))
            .map(|product| ProductRow {
                units_sold: sold.get(&product.id).copied().unwrap_or(0),
                product,
            })
            .collect();
        Ok(PageResponse::paginate(rows, page))
    }

    /// Gets a single product by ID.
    pub async fn get(&self, ctx: &AdminContext, product_id: i64) -> Result<Product, AppError> {
        ctx.require_admin()?;
        load_one(&self.client, Resource::Products, product_id, "Product").await
    }

    /// Creates a product.
    ///
    /// Returns the created record when the API echoes it back.
    pub async fn create(
        &self,
        ctx: &AdminContext,
        draft: ProductDraft,
    ) -> Result<Option<Product>, AppError> {
        ctx.require_admin()?;
        draft.validate()?;

        let created: Option<serde_json::Value> =
            self.client.create(Resource::Products, &draft).await?;

        info!(admin_id = ctx.user_id, name = %draft.name, "Product created");
        Ok(decode_created(Resource::Products, created))
    }

    /// Updates a product's editable fields, keeping its image when the draft
    /// has none.
    pub async fn update(
        &self,
        ctx: &AdminContext,
        product_id: i64,
        draft: ProductDraft,
    ) -> Result<Product, AppError> {
        ctx.require_admin()?;
        draft.validate()?;

        let mut product = self.get(ctx, product_id).await?;
        draft.apply_to(&mut product);
        self.client
            .update::<Product, serde_json::Value>(Resource::Products, product_id, &product)
            .await?;

        info!(admin_id = ctx.user_id, product_id, "Product updated");
        Ok(product)
    }

    /// Deletes a product.
    pub async fn delete(&self, ctx: &AdminContext, product_id: i64) -> Result<(), AppError> {
        ctx.require_admin()?;
        self.client.delete(Resource::Products, product_id).await?;
        info!(admin_id = ctx.user_id, product_id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use shopdesk_core::config::ApiConfig;
    use shopdesk_entity::UserRole;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn admin() -> AdminContext {
        AdminContext {
            user_id: 1,
            name: "Root".into(),
            role: UserRole::Administrator,
            request_time: Utc::now(),
        }
    }

    fn service(server: &MockServer) -> ProductService {
        let client = ResourceClient::new(&ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        })
        .unwrap();
        ProductService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_list_counts_sales_and_survives_missing_lines() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/productos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id_producto": 1, "nombre": "Mug", "stock": 3},
                {"id_producto": 2, "nombre": "Pen", "stock": 0}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/pedido_detalle"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let page = service(&server)
            .list(&admin(), &ProductFilter::default(), &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.total_items, 2);
        assert!(page.items.iter().all(|r| r.units_sold == 0));
    }

    #[tokio::test]
    async fn test_list_applies_stock_filter_with_sales() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/productos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id_producto": 1, "nombre": "Mug", "stock": 3},
                {"id_producto": 2, "nombre": "Pen", "stock": 0}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/pedido_detalle"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id_pedido": 1, "id_producto": 1, "cantidad": 2},
                {"id_pedido": 2, "id_producto": 1, "cantidad": 1}
            ])))
            .mount(&server)
            .await;

        let filter = ProductFilter {
            search: None,
            stock: crate::filter::StockFilter::InStock,
        };
        let page = service(&server)
            .list(&admin(), &filter, &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].units_sold, 3);
    }

    #[tokio::test]
    async fn test_create_sends_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/productos"))
            .and(body_partial_json(json!({
                "nombre": "Mug", "precio": 9.5, "stock": 4, "categoria": "", "estado": "activo"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let created = service(&server)
            .create(&admin(), ProductDraft::new("Mug", "", 9.5, 4))
            .await
            .unwrap();
        assert!(created.is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_image() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/productos/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id_producto": 4, "nombre": "Mug", "precio": 1.0, "stock": 1,
                "imagen": "https://cdn/mug.png", "categoria": "Kitchen"
            })))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/productos/4"))
            .and(body_partial_json(json!({
                "nombre": "Big mug", "imagen": "https://cdn/mug.png", "categoria": "Kitchen"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let product = service(&server)
            .update(&admin(), 4, ProductDraft::new("Big mug", "", 2.0, 1))
            .await
            .unwrap();
        assert_eq!(product.image.as_deref(), Some("https://cdn/mug.png"));
    }
}
