//! Integration tests for the admin use cases against a fake API.

mod helpers;

use chrono::Utc;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use shopdesk_core::error::ErrorKind;
use shopdesk_core::types::PageRequest;
use shopdesk_entity::{OrderStatus, UserRole};
use shopdesk_service::{
    AdminContext, OrderFilter, ProductFilter, StockFilter, UserFilter, UserStatusFilter,
};

async fn seeded_app() -> helpers::TestApp {
    let app = helpers::TestApp::new().await;
    app.mock_users().await;
    app.mock_get("/api/productos", helpers::products_fixture()).await;
    app.mock_get("/api/pedidos", helpers::orders_fixture()).await;
    app.mock_get("/api/pedido_detalle", helpers::order_lines_fixture()).await;
    app
}

async fn admin_context(app: &helpers::TestApp) -> AdminContext {
    let result = app.gate().login("admin@tienda.com", "admin123").await.unwrap();
    AdminContext::from_identity(&result.identity)
}

#[tokio::test]
async fn test_dashboard_after_login() {
    let app = seeded_app().await;
    let ctx = admin_context(&app).await;

    let summary = app.dashboard().summary(&ctx).await.unwrap();
    assert_eq!(summary.total_users, 3);
    assert_eq!(summary.total_products, 3);
    assert_eq!(summary.total_orders, 3);
    assert!((summary.total_sales - 58.0).abs() < f64::EPSILON);

    let recent: Vec<i64> = summary.recent_orders.iter().map(|o| o.order_id).collect();
    assert_eq!(recent, vec![101, 102, 100]);
    assert_eq!(summary.recent_orders[1].customer, "User 7");

    let top: Vec<(i64, i64)> = summary
        .top_products
        .iter()
        .map(|p| (p.product_id, p.units_sold))
        .collect();
    assert_eq!(top, vec![(10, 5), (11, 2), (12, 1)]);
}

#[tokio::test]
async fn test_dashboard_without_order_lines_has_no_top_products() {
    let app = helpers::TestApp::new().await;
    app.mock_users().await;
    app.mock_get("/api/productos", helpers::products_fixture()).await;
    app.mock_get("/api/pedidos", helpers::orders_fixture()).await;
    app.mock_status("/api/pedido_detalle", 500).await;
    let ctx = admin_context(&app).await;

    let summary = app.dashboard().summary(&ctx).await.unwrap();
    assert_eq!(summary.total_orders, 3);
    assert!(summary.top_products.is_empty());
}

#[tokio::test]
async fn test_report_counts_active_users() {
    let app = seeded_app().await;
    let ctx = admin_context(&app).await;

    let report = app.reports().generate(&ctx).await.unwrap();
    assert_eq!(report.active_users, 2);
    assert_eq!(report.total_products, 3);
    assert_eq!(report.top_products[0].name, "Taza");
}

#[tokio::test]
async fn test_user_listing_filters_and_deactivation() {
    let app = seeded_app().await;
    let ctx = admin_context(&app).await;

    let inactive = UserFilter {
        search: None,
        status: UserStatusFilter::Inactive,
    };
    let page = app
        .users()
        .list(&ctx, &inactive, &PageRequest::new(1, 10))
        .await
        .unwrap();
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].id, 3);

    Mock::given(method("PUT"))
        .and(path("/api/usuarios/2"))
        .and(body_partial_json(json!({"estado": "inactivo", "contrasena": "carla123"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.server)
        .await;

    let user = app.users().deactivate(&ctx, 2).await.unwrap();
    assert_eq!(user.id, 2);

    let history = app.users().purchase_history(&ctx, 2).await.unwrap();
    let ids: Vec<i64> = history.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![101, 100]);
}

#[tokio::test]
async fn test_product_listing_with_sales() {
    let app = seeded_app().await;
    let ctx = admin_context(&app).await;

    let filter = ProductFilter {
        search: None,
        stock: StockFilter::OutOfStock,
    };
    let page = app
        .products()
        .list(&ctx, &filter, &PageRequest::new(1, 10))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].product.id, 11);
    assert_eq!(page.items[0].units_sold, 2);
}

#[tokio::test]
async fn test_order_listing_detail_and_status_change() {
    let app = seeded_app().await;
    let ctx = admin_context(&app).await;
    app.mock_get(
        "/api/pedidos/100",
        json!({"id_pedido": 100, "id_usuario": 2, "fecha_pedido": "2024-05-01T10:00:00", "total": 32.0, "estado": "entregado"}),
    )
    .await;

    let shipped = OrderFilter {
        search: None,
        status: Some("shipped".to_string()),
    };
    let page = app
        .orders()
        .list(&ctx, &shipped, &PageRequest::new(1, 10))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].order.id, 102);

    let by_customer = OrderFilter {
        search: Some("carla".to_string()),
        status: None,
    };
    let page = app
        .orders()
        .list(&ctx, &by_customer, &PageRequest::new(1, 10))
        .await
        .unwrap();
    assert_eq!(page.total_items, 2);

    let detail = app.orders().detail(&ctx, 100).await.unwrap();
    assert_eq!(detail.customer_name, "Carla Cliente");
    let products: Vec<&str> = detail.lines.iter().map(|l| l.product.as_str()).collect();
    assert_eq!(products, vec!["Taza", "Camiseta"]);

    Mock::given(method("PUT"))
        .and(path("/api/pedidos/100"))
        .and(body_partial_json(json!({"estado": "enviado"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.server)
        .await;
    let order = app
        .orders()
        .set_status(&ctx, 100, OrderStatus::Shipped)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Shipped);
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let app = seeded_app().await;
    let ctx = admin_context(&app).await;
    app.mock_status("/api/usuarios/99", 404).await;

    let err = app.users().get(&ctx, 99).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_non_admin_context_is_refused() {
    let app = seeded_app().await;
    let ctx = AdminContext {
        user_id: 2,
        name: "Carla Cliente".to_string(),
        role: UserRole::Customer,
        request_time: Utc::now(),
    };

    let err = app.dashboard().summary(&ctx).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}
