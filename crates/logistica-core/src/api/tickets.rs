//! Ticket Routes

use uuid::Uuid;

use super::ApiClient;
use crate::domain::{NewTicket, Ticket, TicketUpdate};
use crate::error::ApiResult;

pub struct Tickets<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> Tickets<'a> {
    /// `GET /tickets` (the backend returns open tickets)
    pub async fn all(&self) -> ApiResult<Vec<Ticket>> {
        self.client.fetch(self.client.get("/tickets")).await
    }

    /// `GET /tickets/order/{order_id}`
    pub async fn by_order(&self, order_id: Uuid) -> ApiResult<Vec<Ticket>> {
        let path = format!("/tickets/order/{}", order_id);
        self.client.fetch(self.client.get(&path)).await
    }

    /// `POST /tickets`
    pub async fn create(&self, ticket: &NewTicket) -> ApiResult<Ticket> {
        self.client.fetch(self.client.post("/tickets").json(ticket)).await
    }

    /// `PATCH /tickets/{ticket_id}`
    pub async fn update(&self, ticket_id: Uuid, update: &TicketUpdate) -> ApiResult<Ticket> {
        let path = format!("/tickets/{}", ticket_id);
        self.client.fetch(self.client.patch(&path).json(update)).await
    }
}
