//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopdesk_auth::{AccessGate, SessionStore};
use shopdesk_client::ResourceClient;
use shopdesk_core::config::AppConfig;
use shopdesk_core::traits::Navigator;
use shopdesk_service::{
    DashboardService, OrderService, ProductService, ReportService, UserService,
};
use shopdesk_store::StoreManager;

/// Counts redirects to the login surface.
#[derive(Debug, Default)]
pub struct RecordingNavigator(AtomicUsize);

impl RecordingNavigator {
    /// Number of redirects so far.
    pub fn redirects(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test application context backed by a fake API and a temporary session file
pub struct TestApp {
    /// Fake remote API
    pub server: MockServer,
    /// Application config pointing at the fake API
    pub config: AppConfig,
    /// Holds the session file directory alive
    pub data_dir: TempDir,
    /// Navigation recorder
    pub navigator: Arc<RecordingNavigator>,
    /// Shared API client
    pub client: Arc<ResourceClient>,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let data_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.api.base_url = server.uri();
        config.session.store_path = data_dir
            .path()
            .join("session.json")
            .to_string_lossy()
            .into_owned();

        let client = Arc::new(ResourceClient::new(&config.api).expect("Failed to build client"));

        Self {
            server,
            config,
            data_dir,
            navigator: Arc::new(RecordingNavigator::default()),
            client,
        }
    }

    /// Build a gate over the file session store, as a fresh process would
    pub fn gate(&self) -> AccessGate {
        let store = StoreManager::new(&self.config.session).expect("Failed to init session store");
        let sessions = SessionStore::new(Arc::new(store), &self.config.session);
        AccessGate::new(
            self.client.clone(),
            sessions,
            self.navigator.clone(),
            &self.config.session,
        )
    }

    /// Dashboard service
    pub fn dashboard(&self) -> DashboardService {
        DashboardService::new(self.client.clone(), self.config.dashboard.clone())
    }

    /// Report service
    pub fn reports(&self) -> ReportService {
        ReportService::new(self.client.clone(), self.config.dashboard.clone())
    }

    /// User service
    pub fn users(&self) -> UserService {
        UserService::new(self.client.clone())
    }

    /// Product service
    pub fn products(&self) -> ProductService {
        ProductService::new(self.client.clone())
    }

    /// Order service
    pub fn orders(&self) -> OrderService {
        OrderService::new(self.client.clone())
    }

    /// Serve `body` for GET `route`
    pub async fn mock_get(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer GET `route` with `status`
    pub async fn mock_status(&self, route: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Serve the standard user fixture on the users collection and items
    pub async fn mock_users(&self) {
        let users = users_fixture();
        for user in users.as_array().into_iter().flatten() {
            let id = user["id_usuario"].as_i64().unwrap_or_default();
            self.mock_get(&format!("/api/usuarios/{id}"), user.clone()).await;
        }
        self.mock_get("/api/usuarios", users).await;
    }
}

/// Users: an active admin, a customer, an inactive admin
pub fn users_fixture() -> Value {
    json!([
        {
            "id_usuario": 1, "nombre": "Admin Tienda", "correo": "Admin@Tienda.com",
            "contrasena": "admin123", "rol": "administrador", "estado": "activo",
            "fecha_registro": "2024-01-10T09:00:00"
        },
        {
            "id_usuario": 2, "nombre": "Carla Cliente", "correo": "carla@correo.com",
            "contrasena": "carla123", "rol": "usuario", "estado": "activo"
        },
        {
            "id_usuario": 3, "nombre": "Viejo Admin", "correo": "viejo@tienda.com",
            "contrasena": "viejo123", "rol": "administrador", "estado": "inactivo"
        }
    ])
}

/// Products
pub fn products_fixture() -> Value {
    json!([
        {"id_producto": 10, "nombre": "Taza", "descripcion": "Ceramica", "precio": 8.5, "stock": 12},
        {"id_producto": 11, "nombre": "Camiseta", "descripcion": "Algodon", "precio": 15.0, "stock": 0},
        {"id_producto": 12, "nombre": "Gorra", "precio": 11.0, "stock": 4}
    ])
}

/// Orders
pub fn orders_fixture() -> Value {
    json!([
        {"id_pedido": 100, "id_usuario": 2, "fecha_pedido": "2024-05-01T10:00:00", "total": 32.0, "estado": "entregado"},
        {"id_pedido": 101, "id_usuario": 2, "fecha_pedido": "2024-05-03T10:00:00", "total": 15.0, "estado": "pendiente"},
        {"id_pedido": 102, "id_usuario": 7, "fecha_pedido": "2024-05-02T10:00:00", "total": 11.0, "estado": "enviado"}
    ])
}

/// Order lines
pub fn order_lines_fixture() -> Value {
    json!([
        {"id_pedido": 100, "id_producto": 10, "cantidad": 2, "precio_unitario": 8.5, "subtotal": 17.0},
        {"id_pedido": 100, "id_producto": 11, "cantidad": 1, "precio_unitario": 15.0, "subtotal": 15.0},
        {"id_pedido": 101, "id_producto": 11, "cantidad": 1, "precio_unitario": 15.0},
        {"id_pedido": 102, "id_producto": 12, "cantidad": 1, "precio_unitario": 11.0},
        {"id_pedido": 102, "id_producto": 10, "cantidad": 3, "precio_unitario": 8.5}
    ])
}
