//! Order Entity
//!
//! One marketplace order as returned by the order listing and category views.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

open_enum! {
    /// Marketplace an order came from
    pub enum Platform {
        Falabella => "falabella",
        MercadoLibre => "mercadolibre",
    }
}

impl Platform {
    /// Display name shown on badges
    pub fn label(&self) -> &str {
        match self {
            Platform::Falabella => "Falabella",
            Platform::MercadoLibre => "MercadoLibre",
            Platform::Other(raw) => raw.as_str(),
        }
    }
}

open_enum! {
    /// Fulfillment state of an order
    pub enum OrderStatus {
        ListoDespachar => "listo_despachar",
        EtiquetaImpresa => "etiqueta_impresa",
        Enviado => "enviado",
        Entregado => "entregado",
        Cancelado => "cancelado",
    }
}

impl OrderStatus {
    /// `listo_despachar` -> `LISTO DESPACHAR`
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

/// Order data structure (matches backend rows)
///
/// The category views return loosely shaped rows, so every field but `id`
/// tolerates absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub external_order_id: Option<String>,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub current_status: OrderStatus,

    // Customer
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,

    // Shipping
    #[serde(default)]
    pub shipping_type: Option<String>,
    #[serde(default)]
    pub shipping_city: Option<String>,
    #[serde(default)]
    pub shipping_region: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,

    // Timestamps, raw as sent; formatting owns parsing
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Dispatch deadline
    #[serde(default)]
    pub limite_despacho: Option<String>,
    #[serde(default)]
    pub promised_delivery: Option<String>,

    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub items_count: Option<i64>,

    // Deadline tracking, computed server-side
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub is_delayed: bool,
    #[serde(default)]
    pub hours_delayed: Option<f64>,
    #[serde(default)]
    pub hours_until_deadline: Option<f64>,
}

impl Order {
    /// Order number for headings, falling back to the marketplace id
    pub fn display_number(&self) -> &str {
        self.order_number
            .as_deref()
            .or(self.external_order_id.as_deref())
            .unwrap_or("N/A")
    }

    /// `falabella_directo` -> `falabella directo`
    pub fn shipping_type_label(&self) -> String {
        self.shipping_type
            .as_deref()
            .map(|t| t.replace('_', " "))
            .unwrap_or_default()
    }
}
