//! Dashboard Stats
//!
//! Aggregate counts, derived entirely by the backend.

use serde::{Deserialize, Serialize};

/// Response of `GET /dashboard/stats`
///
/// The backend answers a failed stats query with 200 and an `error` field,
/// so that field is kept to tell failure apart from genuine zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub orders_today: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub orders_delayed: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub orders_ready_to_ship: u64,
    #[serde(default)]
    pub orders_shipped: Option<u64>,
    #[serde(default)]
    pub orders_delivered_today: Option<u64>,
    #[serde(default)]
    pub avg_delay_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
