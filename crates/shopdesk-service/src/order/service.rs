//! Order administration: listing, detail, status changes and deletion.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use shopdesk_client::ResourceClient;
use shopdesk_core::error::AppError;
use shopdesk_core::types::{PageRequest, PageResponse, Resource};
use shopdesk_entity::{Order, OrderLine, OrderStatus, Product, User};

use crate::catalog::{load_all, load_all_or_empty, load_one};
use crate::context::AdminContext;
use crate::dashboard::service::{customer_name, customer_names, sort_newest_first};
use crate::filter::OrderFilter;

/// An order with its customer's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    /// The order.
    pub order: Order,
    /// Customer display name.
    pub customer: String,
}

/// An order line with its product's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineRow {
    /// The line.
    pub line: OrderLine,
    /// Product display name.
    pub product: String,
}

/// Full view of one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    /// The order.
    pub order: Order,
    /// The customer, when their record still exists.
    pub customer: Option<User>,
    /// Customer display name.
    pub customer_name: String,
    /// Lines of the order.
    pub lines: Vec<OrderLineRow>,
}

impl OrderDetail {
    /// Sum of the line amounts.
    pub fn lines_total(&self) -> f64 {
        self.lines.iter().map(|l| l.line.amount()).sum()
    }
}

/// Handles order administration.
#[derive(Debug, Clone)]
pub struct OrderService {
    /// API client.
    client: Arc<ResourceClient>,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(client: Arc<ResourceClient>) -> Self {
        Self { client }
    }

    /// Lists orders matching `filter`, newest first, with customer names.
    pub async fn list(
        &self,
        ctx: &AdminContext,
        filter: &OrderFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<OrderRow>, AppError> {
        ctx.require_admin()?;

        let (orders, users) = futures::try_join!(
            load_all::<Order>(&self.client, Resource::Orders),
            load_all::<User>(&self.client, Resource::Users),
        )?;
        let names = customer_names(&users);

        let mut sorted: Vec<&Order> = orders.iter().collect();
        sort_newest_first(&mut sorted);

        let rows: Vec<OrderRow> = sorted
            .into_iter()
            .map(|order| OrderRow {
                customer: customer_name(&names, order.user_id),
                order: order.clone(),
            })
            .filter(|row| filter.matches(&row.order, &row.customer))
            .collect();
        Ok(PageResponse::paginate(rows, page))
    }

    /// Gets a single order by ID.
    pub async fn get(&self, ctx: &AdminContext, order_id: i64) -> Result<Order, AppError> {
        ctx.require_admin()?;
        load_one(&self.client, Resource::Orders, order_id, "Order").await
    }

    /// Order with customer and product-named lines.
    ///
    /// A missing product list only costs the product names.
    pub async fn detail(&self, ctx: &AdminContext, order_id: i64) -> Result<OrderDetail, AppError> {
        ctx.require_admin()?;

        let (order, users, lines) = futures::try_join!(
            load_one::<Order>(&self.client, Resource::Orders, order_id, "Order"),
            load_all::<User>(&self.client, Resource::Users),
            load_all::<OrderLine>(&self.client, Resource::OrderLines),
        )?;
        let products: Vec<Product> = load_all_or_empty(&self.client, Resource::Products).await;
        let product_names: HashMap<i64, String> =
            products.iter().map(|p| (p.id, p.display_name())).collect();

        let customer = users.into_iter().find(|u| u.id == order.user_id);
        let customer_name = customer
            .as_ref()
            .map(User::display_name)
            .unwrap_or_else(|| format!("User {}", order.user_id));

        let lines = lines
            .into_iter()
            .filter(|l| l.order_id == order_id)
            .map(|line| OrderLineRow {
                product: product_names
                    .get(&line.product_id)
                    .cloned()
                    .unwrap_or_else(|| format!("Product {}", line.product_id)),
                line,
            })
            .collect();

        Ok(OrderDetail {
            order,
            customer,
            customer_name,
            lines,
        })
    }

    /// Changes an order's status.
    pub async fn set_status(
        &self,
        ctx: &AdminContext,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<Order, AppError> {
        let mut order = self.get(ctx, order_id).await?;
        order.status = status;
        self.client
            .update::<Order, serde_json::Value>(Resource::Orders, order_id, &order)
            .await?;

        info!(admin_id = ctx.user_id, order_id, status = %order.status.as_str(), "Order status changed");
        Ok(order)
    }

    /// Deletes an order.
    pub async fn delete(&self, ctx: &AdminContext, order_id: i64) -> Result<(), AppError> {
        ctx.require_admin()?;
        self.client.delete(Resource::Orders, order_id).await?;
        info!(admin_id = ctx.user_id, order_id, "Order deleted");
        Ok(())
    }
}
