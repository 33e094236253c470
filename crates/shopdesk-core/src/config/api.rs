//! Remote API configuration.

use serde::{Deserialize, Serialize};

/// Remote CRUD API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-resource collection paths.
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    /// Total request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// TCP connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Origin the console presents itself as (sent as the `Origin` header).
    ///
    /// When set, responses must carry a matching `Access-Control-Allow-Origin`
    /// header or the request is reported as a cross-origin rejection.
    #[serde(default)]
    pub client_origin: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoints: EndpointsConfig::default(),
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            client_origin: None,
        }
    }
}

/// Collection paths exposed by the remote API, one per table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Users (subjects).
    #[serde(default = "default_users")]
    pub users: String,
    /// Products.
    #[serde(default = "default_products")]
    pub products: String,
    /// Orders.
    #[serde(default = "default_orders")]
    pub orders: String,
    /// Order line items.
    #[serde(default = "default_order_lines")]
    pub order_lines: String,
    /// Payments.
    #[serde(default = "default_payments")]
    pub payments: String,
    /// Shopping carts.
    #[serde(default = "default_carts")]
    pub carts: String,
    /// Shopping cart items.
    #[serde(default = "default_cart_items")]
    pub cart_items: String,
    /// Favorites.
    #[serde(default = "default_favorites")]
    pub favorites: String,
    /// Payment methods.
    #[serde(default = "default_payment_methods")]
    pub payment_methods: String,
    /// Reports.
    #[serde(default = "default_reports")]
    pub reports: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
            products: default_products(),
            orders: default_orders(),
            order_lines: default_order_lines(),
            payments: default_payments(),
            carts: default_carts(),
            cart_items: default_cart_items(),
            favorites: default_favorites(),
            payment_methods: default_payment_methods(),
            reports: default_reports(),
        }
    }
}

fn default_base_url() -> String {
    "https://apijhon.onrender.com".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_users() -> String {
    "/api/usuarios".to_string()
}

fn default_products() -> String {
    "/api/productos".to_string()
}

fn default_orders() -> String {
    "/api/pedidos".to_string()
}

fn default_order_lines() -> String {
    "/api/pedido_detalle".to_string()
}

fn default_payments() -> String {
    "/api/pagos".to_string()
}

fn default_carts() -> String {
    "/api/carrito".to_string()
}

fn default_cart_items() -> String {
    "/api/carrito_detalle".to_string()
}

fn default_favorites() -> String {
    "/api/favoritos".to_string()
}

fn default_payment_methods() -> String {
    "/api/metodos_pago".to_string()
}

fn default_reports() -> String {
    "/api/reportes".to_string()
}
