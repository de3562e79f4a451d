//! View State
//!
//! What each screen shows, kept free of any rendering so it can be driven
//! and checked without a browser.

mod loadable;
mod lifetime;
mod badge;
mod category;
mod dashboard;
mod detail;


pub use loadable::{load, Loadable};
pub use lifetime::ViewLifetime;
pub use badge::{platform_tone, priority_tone, status_tone, ticket_status_tone, BadgeTone};
pub use category::{fetch_orders, list_view, ListView, OrderCategory};
pub use dashboard::{primary_cards, secondary_cards, StatCard};
pub use detail::{fetch_activity, submit_comment, DetailState, OrderActivity, Posted, COMMENT_AUTHOR};
