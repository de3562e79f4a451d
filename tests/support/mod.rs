// Shared harness for the page tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use leptos::prelude::*;
use logistica_core::domain::{Comment, DashboardStats, NewComment, Order, Ticket};
use logistica_core::{ActivityService, ApiError, ApiResult, OrderService};
use logistica_ui::context::{provide_services, Services};
use serde_json::{json, Value};
use uuid::Uuid;
use wasm_bindgen::JsCast;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.unchecked_into()
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::HtmlElement) {
    mount.remove();
}

/// Mount `page` with `backend` provided as both services.
pub fn mount_page<F, N>(backend: FakeBackend, page: F) -> web_sys::HtmlElement
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let mount = create_mount_point();
    let backend = Arc::new(backend);
    leptos::mount::mount_to(mount.clone(), move || {
        provide_services(Services::new(backend.clone(), backend));
        page()
    })
    .forget();
    mount
}

/// Let spawned fetches resolve and the DOM settle.
pub async fn settle() {
    gloo_timers::future::TimeoutFuture::new(30).await;
}

pub fn text(mount: &web_sys::HtmlElement) -> String {
    mount.text_content().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn order(fields: Value) -> Order {
    let mut row = json!({
        "id": Uuid::new_v4(),
        "order_number": "1001",
        "platform": "falabella",
        "current_status": "listo_despachar",
        "customer_name": "Juan Soto",
        "shipping_city": "Valparaíso",
        "limite_despacho": "2026-10-16T15:00:00+00:00"
    });
    if let (Some(row), Some(fields)) = (row.as_object_mut(), fields.as_object()) {
        for (key, value) in fields {
            row.insert(key.clone(), value.clone());
        }
    }
    serde_json::from_value(row).unwrap()
}

pub fn comment(order_id: Uuid, body: &str) -> Comment {
    serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "order_id": order_id,
        "comment": body,
        "user_name": "Usuario",
        "created_at": "2026-10-16T12:00:00+00:00"
    }))
    .unwrap()
}

pub fn ticket(order_id: Uuid, title: &str) -> Ticket {
    serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "order_id": order_id,
        "title": title,
        "description": "Cliente reclama",
        "status": "open"
    }))
    .unwrap()
}

// ---------------------------------------------------------------------------
// Fake backend
// ---------------------------------------------------------------------------

/// In-memory stand-in for the API; `None` lists fail with a 503.
#[derive(Default)]
pub struct FakeBackend {
    pub today: Option<Vec<Order>>,
    pub delayed: Option<Vec<Order>>,
    pub at_risk: Option<Vec<Order>>,
    pub stats: Option<DashboardStats>,
    pub comments: Mutex<Vec<Comment>>,
    pub tickets: Vec<Ticket>,
}

fn unavailable<T>() -> ApiResult<T> {
    Err(ApiError::Server {
        status: 503,
        body: "backend dormido".into(),
    })
}

#[async_trait(?Send)]
impl OrderService for FakeBackend {
    async fn orders_today(&self) -> ApiResult<Vec<Order>> {
        self.today.clone().map_or_else(unavailable, Ok)
    }

    async fn delayed_orders(&self) -> ApiResult<Vec<Order>> {
        self.delayed.clone().map_or_else(unavailable, Ok)
    }

    async fn orders_at_risk(&self) -> ApiResult<Vec<Order>> {
        self.at_risk.clone().map_or_else(unavailable, Ok)
    }

    async fn order(&self, id: Uuid) -> ApiResult<Order> {
        self.today
            .iter()
            .flatten()
            .find(|order| order.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.stats.clone().map_or_else(unavailable, Ok)
    }
}

#[async_trait(?Send)]
impl ActivityService for FakeBackend {
    async fn comments_for(&self, order_id: Uuid) -> ApiResult<Vec<Comment>> {
        let comments = self.comments.lock().unwrap();
        Ok(comments.iter().filter(|c| c.order_id == order_id).cloned().collect())
    }

    async fn tickets_for(&self, order_id: Uuid) -> ApiResult<Vec<Ticket>> {
        Ok(self.tickets.iter().filter(|t| t.order_id == order_id).cloned().collect())
    }

    async fn add_comment(&self, new: &NewComment) -> ApiResult<Comment> {
        let created = comment(new.order_id, &new.comment);
        self.comments.lock().unwrap().push(created.clone());
        Ok(created)
    }
}
