//! Comment Routes

use uuid::Uuid;

use super::ApiClient;
use crate::domain::{Comment, NewComment};
use crate::error::ApiResult;

pub struct Comments<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> Comments<'a> {
    /// `GET /comments/order/{order_id}`
    pub async fn by_order(&self, order_id: Uuid) -> ApiResult<Vec<Comment>> {
        let path = format!("/comments/order/{}", order_id);
        self.client.fetch(self.client.get(&path)).await
    }

    /// `POST /comments`
    pub async fn create(&self, comment: &NewComment) -> ApiResult<Comment> {
        self.client.fetch(self.client.post("/comments").json(comment)).await
    }
}
