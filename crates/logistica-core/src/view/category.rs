//! Order Categories
//!
//! The three order lists (today, delayed, at risk) share one layout and
//! differ only in copy and in the badge each card carries. Membership is
//! decided by the backend; items render in response order.

use super::{BadgeTone, Loadable};
use crate::domain::Order;
use crate::error::ApiResult;
use crate::format::MISSING;
use crate::service::OrderService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderCategory {
    Today,
    Delayed,
    AtRisk,
}

impl OrderCategory {
    pub const ALL: [OrderCategory; 3] = [OrderCategory::Today, OrderCategory::Delayed, OrderCategory::AtRisk];

    /// Tag used in log lines
    pub fn log_tag(self) -> &'static str {
        match self {
            OrderCategory::Today => "TODAY",
            OrderCategory::Delayed => "DELAYED",
            OrderCategory::AtRisk => "AT-RISK",
        }
    }

    /// Client-side route
    pub fn path(self) -> &'static str {
        match self {
            OrderCategory::Today => "/today",
            OrderCategory::Delayed => "/delayed",
            OrderCategory::AtRisk => "/at-risk",
        }
    }

    /// Short label for navigation
    pub fn nav_label(self) -> &'static str {
        match self {
            OrderCategory::Today => "Hoy",
            OrderCategory::Delayed => "Atrasadas",
            OrderCategory::AtRisk => "En Riesgo",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            OrderCategory::Today => "Órdenes del Día",
            OrderCategory::Delayed => "⚠️ Órdenes Atrasadas",
            OrderCategory::AtRisk => "⚡ Órdenes en Riesgo (Preventivo)",
        }
    }

    /// Shown when the backend returned an empty list
    pub fn empty_message(self) -> &'static str {
        match self {
            OrderCategory::Today => "No hay órdenes para hoy",
            OrderCategory::Delayed => "¡Excelente! No hay órdenes atrasadas",
            OrderCategory::AtRisk => "No hay órdenes en riesgo",
        }
    }

    /// An empty delayed list is good news and is styled as such.
    pub fn empty_is_good(self) -> bool {
        matches!(self, OrderCategory::Delayed)
    }

    /// Shown when the fetch failed
    pub fn failure_message(self) -> &'static str {
        match self {
            OrderCategory::Today => "No se pudieron cargar las órdenes del día",
            OrderCategory::Delayed => "No se pudieron cargar las órdenes atrasadas",
            OrderCategory::AtRisk => "No se pudieron cargar las órdenes en riesgo",
        }
    }

    /// Card accent
    pub fn tone(self) -> BadgeTone {
        match self {
            OrderCategory::Today => BadgeTone::Blue,
            OrderCategory::Delayed => BadgeTone::Red,
            OrderCategory::AtRisk => BadgeTone::Yellow,
        }
    }

    /// Label in front of the dispatch deadline
    pub fn deadline_label(self) -> &'static str {
        match self {
            OrderCategory::Delayed => "Debió enviarse",
            OrderCategory::Today | OrderCategory::AtRisk => "Límite",
        }
    }

    /// Badge on each card: shipping type, hours late, or hours left
    pub fn badge_text(self, order: &Order) -> String {
        match self {
            OrderCategory::Today => order.shipping_type_label(),
            OrderCategory::Delayed => {
                format!("{}h atrasada", compact_hours(order.hours_delayed.unwrap_or(0.0)))
            }
            OrderCategory::AtRisk => match order.hours_until_deadline {
                Some(hours) => format!("{:.1}h restantes", hours),
                None => format!("{} restantes", MISSING),
            },
        }
    }
}

/// `4` for whole hours, `4.5` otherwise
fn compact_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.0}", hours)
    } else {
        format!("{:.1}", hours)
    }
}

/// Fetch the category's list from its endpoint.
pub async fn fetch_orders<S>(service: &S, category: OrderCategory) -> ApiResult<Vec<Order>>
where
    S: OrderService + ?Sized,
{
    match category {
        OrderCategory::Today => service.orders_today().await,
        OrderCategory::Delayed => service.delayed_orders().await,
        OrderCategory::AtRisk => service.orders_at_risk().await,
    }
}

/// What an order list should render for its current state
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Empty(&'static str),
    Failed { message: &'static str, reason: String },
    Orders(&'a [Order]),
}

pub fn list_view(category: OrderCategory, state: &Loadable<Vec<Order>>) -> ListView<'_> {
    match state {
        Loadable::Idle | Loadable::Loading => ListView::Loading,
        Loadable::Failed(reason) => ListView::Failed {
            message: category.failure_message(),
            reason: reason.clone(),
        },
        Loadable::Loaded(orders) if orders.is_empty() => ListView::Empty(category.empty_message()),
        Loadable::Loaded(orders) => ListView::Orders(orders),
    }
}
