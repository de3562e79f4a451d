//! Logistica Core
//!
//! Everything the dashboard needs that does not touch the DOM:
//! - domain: Orders, comments, tickets and stats as the backend sends them
//! - api: Typed REST client grouped by resource
//! - service: Query traits the views depend on
//! - format: Display formatting for dates and amounts
//! - view: Loading state, per-view copy and the order detail state machine

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod service;
pub mod view;

pub use api::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use service::{ActivityService, OrderService};
