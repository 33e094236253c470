//! Wiring of the client, session store, access gate and services.

use std::sync::Arc;

use shopdesk_auth::{AccessGate, SessionStore};
use shopdesk_client::ResourceClient;
use shopdesk_core::config::AppConfig;
use shopdesk_core::error::AppError;
use shopdesk_service::{
    AdminContext, DashboardService, OrderService, ProductService, ReportService, UserService,
};
use shopdesk_store::StoreManager;

use crate::navigator::CliNavigator;

/// Everything a command needs, built once per invocation.
#[derive(Debug, Clone)]
pub struct App {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Session gate.
    pub gate: AccessGate,
    /// Dashboard summary.
    pub dashboard: DashboardService,
    /// Sales reports.
    pub reports: ReportService,
    /// User administration.
    pub users: UserService,
    /// Product administration.
    pub products: ProductService,
    /// Order administration.
    pub orders: OrderService,
}

impl App {
    /// Build the application from configuration.
    pub fn build(config: AppConfig) -> Result<Self, AppError> {
        let client = Arc::new(ResourceClient::new(&config.api)?);
        let store = StoreManager::new(&config.session)?;
        let sessions = SessionStore::new(Arc::new(store), &config.session);
        let gate = AccessGate::new(
            client.clone(),
            sessions,
            Arc::new(CliNavigator),
            &config.session,
        );

        Ok(Self {
            dashboard: DashboardService::new(client.clone(), config.dashboard.clone()),
            reports: ReportService::new(client.clone(), config.dashboard.clone()),
            users: UserService::new(client.clone()),
            products: ProductService::new(client.clone()),
            orders: OrderService::new(client),
            gate,
            config,
        })
    }

    /// Check the stored session and build the operator context.
    pub async fn admin_context(&self) -> Result<AdminContext, AppError> {
        let identity = self.gate.authorize().await?;
        Ok(AdminContext::from_identity(&identity))
    }
}
