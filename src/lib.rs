//! Logistica Frontend
//!
//! Operations dashboard: today's, delayed and at-risk orders, with a detail
//! view for comments and tickets.

pub mod app;
pub mod components;
pub mod context;
pub mod hooks;
pub mod pages;
