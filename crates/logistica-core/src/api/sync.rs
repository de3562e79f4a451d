//! Sync Routes
//!
//! Ask the backend to pull fresh orders from the marketplaces. The backend
//! runs the sync inline, so these calls can take most of the timeout.

use super::ApiClient;
use crate::domain::SyncReport;
use crate::error::ApiResult;

pub struct SyncTriggers<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> SyncTriggers<'a> {
    /// `POST /sync/all`
    pub async fn all(&self) -> ApiResult<SyncReport> {
        self.client.fetch(self.client.post("/sync/all")).await
    }

    /// `POST /sync/falabella`
    pub async fn falabella(&self) -> ApiResult<SyncReport> {
        self.client.fetch(self.client.post("/sync/falabella")).await
    }

    /// `POST /sync/mercadolibre`
    pub async fn mercadolibre(&self) -> ApiResult<SyncReport> {
        self.client.fetch(self.client.post("/sync/mercadolibre")).await
    }
}
