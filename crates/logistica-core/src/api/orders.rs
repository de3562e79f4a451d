//! Order Routes

use uuid::Uuid;

use super::ApiClient;
use crate::domain::Order;
use crate::error::ApiResult;

/// Largest page the backend accepts
pub const MAX_PAGE_LIMIT: u32 = 500;

/// `limit`/`offset` pair for the full order listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPage {
    pub limit: u32,
    pub offset: u32,
}

impl Default for OrderPage {
    fn default() -> Self {
        Self { limit: 100, offset: 0 }
    }
}

pub struct Orders<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> Orders<'a> {
    /// `GET /orders?limit=&offset=`, newest first
    pub async fn list(&self, page: OrderPage) -> ApiResult<Vec<Order>> {
        let limit = page.limit.min(MAX_PAGE_LIMIT);
        let request = self
            .client
            .get("/orders")
            .query(&[("limit", limit), ("offset", page.offset)]);
        self.client.fetch(request).await
    }

    /// `GET /orders/{id}`
    pub async fn get(&self, id: Uuid) -> ApiResult<Order> {
        self.client.fetch(self.client.get(&format!("/orders/{}", id))).await
    }

    /// `GET /orders/today`
    pub async fn today(&self) -> ApiResult<Vec<Order>> {
        self.client.fetch(self.client.get("/orders/today")).await
    }

    /// `GET /orders/delayed`: past the dispatch deadline
    pub async fn delayed(&self) -> ApiResult<Vec<Order>> {
        self.client.fetch(self.client.get("/orders/delayed")).await
    }

    /// `GET /orders/at-risk`: close to the deadline, not yet delayed
    pub async fn at_risk(&self) -> ApiResult<Vec<Order>> {
        self.client.fetch(self.client.get("/orders/at-risk")).await
    }

    /// `GET /orders/to-ship`: every order still pending dispatch
    pub async fn to_ship(&self) -> ApiResult<Vec<Order>> {
        self.client.fetch(self.client.get("/orders/to-ship")).await
    }

    /// `GET /orders/delivered`
    pub async fn delivered(&self) -> ApiResult<Vec<Order>> {
        self.client.fetch(self.client.get("/orders/delivered")).await
    }
}
