//! Dashboard Routes

use super::ApiClient;
use crate::domain::DashboardStats;
use crate::error::{ApiError, ApiResult};

pub struct Dashboard<'a> {
    pub(crate) client: &'a ApiClient,
}

impl<'a> Dashboard<'a> {
    /// `GET /dashboard/stats`
    ///
    /// A 200 carrying an `error` field is a failed query on the backend and
    /// is returned as [`ApiError::Decode`] rather than as zero counts.
    pub async fn stats(&self) -> ApiResult<DashboardStats> {
        let stats: DashboardStats = self.client.fetch(self.client.get("/dashboard/stats")).await?;
        match stats.error {
            Some(reason) => {
                log::error!("API Error: dashboard stats failed upstream: {}", reason);
                Err(ApiError::Decode(reason))
            }
            None => Ok(stats),
        }
    }
}
