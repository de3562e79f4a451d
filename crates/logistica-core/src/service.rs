//! Order Query Facade
//!
//! The subset of the API the views use, as traits, so views can be driven
//! by the real client or an in-memory fake.

use async_trait::async_trait;
use uuid::Uuid;

use crate::api::ApiClient;
use crate::domain::{Comment, DashboardStats, NewComment, Order, Ticket};
use crate::error::ApiResult;

/// Read side used by the page views
#[async_trait(?Send)]
pub trait OrderService {
    async fn orders_today(&self) -> ApiResult<Vec<Order>>;

    async fn delayed_orders(&self) -> ApiResult<Vec<Order>>;

    async fn orders_at_risk(&self) -> ApiResult<Vec<Order>>;

    async fn order(&self, id: Uuid) -> ApiResult<Order>;

    async fn dashboard_stats(&self) -> ApiResult<DashboardStats>;
}

/// Comments and tickets attached to a single order
#[async_trait(?Send)]
pub trait ActivityService {
    async fn comments_for(&self, order_id: Uuid) -> ApiResult<Vec<Comment>>;

    async fn tickets_for(&self, order_id: Uuid) -> ApiResult<Vec<Ticket>>;

    async fn add_comment(&self, comment: &NewComment) -> ApiResult<Comment>;
}

#[async_trait(?Send)]
impl OrderService for ApiClient {
    async fn orders_today(&self) -> ApiResult<Vec<Order>> {
        self.orders().today().await
    }

    async fn delayed_orders(&self) -> ApiResult<Vec<Order>> {
        self.orders().delayed().await
    }

    async fn orders_at_risk(&self) -> ApiResult<Vec<Order>> {
        self.orders().at_risk().await
    }

    async fn order(&self, id: Uuid) -> ApiResult<Order> {
        self.orders().get(id).await
    }

    async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.dashboard().stats().await
    }
}

#[async_trait(?Send)]
impl ActivityService for ApiClient {
    async fn comments_for(&self, order_id: Uuid) -> ApiResult<Vec<Comment>> {
        self.comments().by_order(order_id).await
    }

    async fn tickets_for(&self, order_id: Uuid) -> ApiResult<Vec<Ticket>> {
        self.tickets().by_order(order_id).await
    }

    async fn add_comment(&self, comment: &NewComment) -> ApiResult<Comment> {
        self.comments().create(comment).await
    }
}
