//! Sales report generation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopdesk_client::ResourceClient;
use shopdesk_core::config::DashboardConfig;
use shopdesk_core::error::AppError;
use shopdesk_core::types::Resource;
use shopdesk_entity::{Order, Product, User};

use crate::catalog::load_all;
use crate::context::AdminContext;
use crate::sales::{TopProduct, load_top_products};

/// Sales report data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Sum of all order totals.
    pub total_sales: f64,
    /// Number of orders.
    pub total_orders: usize,
    /// Number of users with an active account.
    pub active_users: usize,
    /// Number of products.
    pub total_products: usize,
    /// Best sellers by units.
    pub top_products: Vec<TopProduct>,
}

/// Generates sales reports.
#[derive(Debug, Clone)]
pub struct ReportService {
    /// API client.
    client: Arc<ResourceClient>,
    /// Ranking limits.
    config: DashboardConfig,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(client: Arc<ResourceClient>, config: DashboardConfig) -> Self {
        Self { client, config }
    }

    /// Generate the sales report from the current data.
    pub async fn generate(&self, ctx: &AdminContext) -> Result<SalesReport, AppError> {
        ctx.require_admin()?;

        let (users, products, orders) = futures::try_join!(
            load_all::<User>(&self.client, Resource::Users),
            load_all::<Product>(&self.client, Resource::Products),
            load_all::<Order>(&self.client, Resource::Orders),
        )?;
        let top_products =
            load_top_products(&self.client, &products, self.config.top_products_limit).await;

        Ok(SalesReport {
            generated_at: Utc::now(),
            total_sales: orders.iter().map(Order::amount).sum(),
            total_orders: orders.len(),
            active_users: users.iter().filter(|u| u.status.is_active()).count(),
            total_products: products.len(),
            top_products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shopdesk_core::config::ApiConfig;
    use shopdesk_entity::UserRole;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_report_counts_active_users_and_ranks_products() {
        let server = MockServer::start().await;
        let routes = [
            (
                "/api/usuarios",
                json!([
                    {"id_usuario": 1, "estado": "activo"},
                    {"id_usuario": 2, "estado": "inactivo"},
                    {"id_usuario": 3, "estado": "activo"}
                ]),
            ),
            (
                "/api/productos",
                json!([{"id_producto": 1, "nombre": "Mug"}, {"id_producto": 2, "nombre": "Pen"}]),
            ),
            (
                "/api/pedidos",
                json!([{"id_pedido": 1, "id_usuario": 1, "total": 30.0}]),
            ),
            (
                "/api/pedido_detalle",
                json!([
                    {"id_pedido": 1, "id_producto": 2, "cantidad": 4, "precio_unitario": 5.0},
                    {"id_pedido": 1, "id_producto": 1, "cantidad": 1, "precio_unitario": 10.0}
                ]),
            ),
        ];
        for (route, body) in routes {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .mount(&server)
                .await;
        }

        let client = ResourceClient::new(&ApiConfig {
            base_url: server.uri(),
            ..ApiConfig::default()
        })
        .unwrap();
        let service = ReportService::new(Arc::new(client), DashboardConfig::default());
        let ctx = AdminContext {
            user_id: 1,
            name: "Root".into(),
            role: UserRole::Administrator,
            request_time: Utc::now(),
        };

        let report = service.generate(&ctx).await.unwrap();
        assert_eq!(report.active_users, 2);
        assert_eq!(report.total_orders, 1);
        assert_eq!(report.total_sales, 30.0);
        assert_eq!(report.total_products, 2);
        assert_eq!(report.top_products[0].name, "Pen");
        assert_eq!(report.top_products[0].units_sold, 4);
    }
}
