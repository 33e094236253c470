//! Dashboard service: headline totals, latest orders, best sellers.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use shopdesk_client::ResourceClient;
use shopdesk_core::config::DashboardConfig;
use shopdesk_core::error::AppError;
use shopdesk_core::types::Resource;
use shopdesk_entity::{Order, OrderStatus, Product, User};

use crate::catalog::load_all;
use crate::context::AdminContext;
use crate::sales::{TopProduct, load_top_products};

/// One of the latest orders shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    /// Order id.
    pub order_id: i64,
    /// Customer display name.
    pub customer: String,
    /// Placement timestamp as sent by the API.
    pub placed_at: Option<String>,
    /// Order total.
    pub total: f64,
    /// Fulfilment status.
    pub status: OrderStatus,
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of users.
    pub total_users: usize,
    /// Number of products.
    pub total_products: usize,
    /// Number of orders.
    pub total_orders: usize,
    /// Sum of all order totals.
    pub total_sales: f64,
    /// Latest orders, newest first.
    pub recent_orders: Vec<RecentOrder>,
    /// Best sellers by units.
    pub top_products: Vec<TopProduct>,
}

/// Builds the dashboard summary.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// API client.
    client: Arc<ResourceClient>,
    /// Limits for the recent and top lists.
    config: DashboardConfig,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(client: Arc<ResourceClient>, config: DashboardConfig) -> Self {
        Self { client, config }
    }

    /// Fetch users, products and orders concurrently and summarize them.
    ///
    /// Order lines are only needed for the best sellers; if they cannot be
    /// loaded that list is empty and the rest of the summary still renders.
    pub async fn summary(&self, ctx: &AdminContext) -> Result<DashboardSummary, AppError> {
        ctx.require_admin()?;

        let (users, products, orders) = futures::try_join!(
            load_all::<User>(&self.client, Resource::Users),
            load_all::<Product>(&self.client, Resource::Products),
            load_all::<Order>(&self.client, Resource::Orders),
        )?;
        let top_products =
            load_top_products(&self.client, &products, self.config.top_products_limit).await;

        let summary = DashboardSummary {
            total_users: users.len(),
            total_products: products.len(),
            total_orders: orders.len(),
            total_sales: orders.iter().map(Order::amount).sum(),
            recent_orders: recent_orders(&orders, &users, self.config.recent_orders_limit),
            top_products,
        };

        info!(
            users = summary.total_users,
            orders = summary.total_orders,
            "Dashboard summary built"
        );
        Ok(summary)
    }
}

/// Customer display names by user id.
pub(crate) fn customer_names(users: &[User]) -> HashMap<i64, String> {
    users.iter().map(|u| (u.id, u.display_name())).collect()
}

/// Customer name for `user_id`, or a synthetic label.
pub(crate) fn customer_name(names: &HashMap<i64, String>, user_id: i64) -> String {
    names
        .get(&user_id)
        .cloned()
        .unwrap_or_else(|| format!("User {user_id}"))
}

/// Sort orders newest first. Orders without a parseable date go last.
pub(crate) fn sort_newest_first(orders: &mut [&Order]) {
    orders.sort_by_key(|o| Reverse(o.placed_at_time()));
}

fn recent_orders(orders: &[Order], users: &[User], limit: usize) -> Vec<RecentOrder> {
    let names = customer_names(users);
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sort_newest_first(&mut sorted);

    sorted
        .into_iter()
        .take(limit)
        .map(|o| RecentOrder {
            order_id: o.id,
            customer: customer_name(&names, o.user_id),
            placed_at: o.placed_at.clone(),
            total: o.amount(),
            status: o.status.clone(),
        })
        .collect()
}
