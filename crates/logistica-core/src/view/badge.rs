//! Badge Tones
//!
//! Enumerated values map to a small fixed palette by equality. Anything
//! unrecognized is neutral.

use crate::domain::{OrderStatus, Platform, TicketPriority, TicketStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Blue,
    Purple,
    Yellow,
    Green,
    Red,
    Neutral,
}

impl BadgeTone {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeTone::Blue => "tone-blue",
            BadgeTone::Purple => "tone-purple",
            BadgeTone::Yellow => "tone-yellow",
            BadgeTone::Green => "tone-green",
            BadgeTone::Red => "tone-red",
            BadgeTone::Neutral => "tone-neutral",
        }
    }
}

pub fn status_tone(status: &OrderStatus) -> BadgeTone {
    match status {
        OrderStatus::ListoDespachar => BadgeTone::Blue,
        OrderStatus::EtiquetaImpresa => BadgeTone::Purple,
        OrderStatus::Enviado => BadgeTone::Yellow,
        OrderStatus::Entregado => BadgeTone::Green,
        OrderStatus::Cancelado => BadgeTone::Red,
        OrderStatus::Other(_) => BadgeTone::Neutral,
    }
}

pub fn platform_tone(platform: &Platform) -> BadgeTone {
    match platform {
        Platform::Falabella => BadgeTone::Green,
        Platform::MercadoLibre => BadgeTone::Yellow,
        Platform::Other(_) => BadgeTone::Neutral,
    }
}

/// Open is red, in progress is yellow, anything else reads as settled.
pub fn ticket_status_tone(status: &TicketStatus) -> BadgeTone {
    match status {
        TicketStatus::Open => BadgeTone::Red,
        TicketStatus::InProgress => BadgeTone::Yellow,
        _ => BadgeTone::Green,
    }
}

pub fn priority_tone(priority: &TicketPriority) -> BadgeTone {
    match priority {
        TicketPriority::Urgent => BadgeTone::Red,
        TicketPriority::High => BadgeTone::Yellow,
        TicketPriority::Medium => BadgeTone::Blue,
        TicketPriority::Low | TicketPriority::Other(_) => BadgeTone::Neutral,
    }
}
