//! Pages
//!
//! One component per kind of route.

mod category;
mod dashboard;

pub use category::CategoryPage;
pub use dashboard::Dashboard;
