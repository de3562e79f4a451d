//! UI Components
//!
//! Reusable Leptos components.

mod badge;
mod layout;
mod order_card;
mod order_detail_modal;
mod order_list;
mod status;

pub use badge::Badge;
pub use layout::Layout;
pub use order_card::OrderCard;
pub use order_detail_modal::OrderDetailModal;
pub use order_list::OrderList;
pub use status::{LoadFailed, Loading};
