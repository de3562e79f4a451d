//! Comment Entity
//!
//! Free-text notes operators attach to an order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub order_id: Uuid,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub user_name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for `POST /comments`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    pub order_id: Uuid,
    pub comment: String,
    pub user_name: String,
}
