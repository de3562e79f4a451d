//! Dashboard Cards

use super::BadgeTone;
use crate::domain::DashboardStats;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub tone: BadgeTone,
}

impl StatCard {
    fn new(label: &'static str, value: String, tone: BadgeTone) -> Self {
        Self { label, value, tone }
    }
}

/// Today / delayed / ready to ship, always shown
pub fn primary_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard::new("Órdenes Hoy", stats.orders_today.to_string(), BadgeTone::Blue),
        StatCard::new("Atrasadas", stats.orders_delayed.to_string(), BadgeTone::Red),
        StatCard::new("Listo Despachar", stats.orders_ready_to_ship.to_string(), BadgeTone::Green),
    ]
}

/// Extra counts, only those the backend reported
pub fn secondary_cards(stats: &DashboardStats) -> Vec<StatCard> {
    let mut cards = Vec::new();
    if let Some(shipped) = stats.orders_shipped {
        cards.push(StatCard::new("Enviadas", shipped.to_string(), BadgeTone::Yellow));
    }
    if let Some(delivered) = stats.orders_delivered_today {
        cards.push(StatCard::new("Entregadas Hoy", delivered.to_string(), BadgeTone::Green));
    }
    if let Some(avg) = stats.avg_delay_hours {
        cards.push(StatCard::new("Atraso Promedio", format!("{:.1}h", avg), BadgeTone::Purple));
    }
    cards
}
