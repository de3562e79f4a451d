//! Domain Layer
//!
//! Entities as the backend sends them. Nothing here is owned or validated
//! locally; unknown enumerated values are kept, never rejected.

use serde::{Deserialize, Deserializer};

/// Declares a wire enum that keeps unrecognized values in `Other`.
///
/// A JSON `null` decodes as `Other("")`, the same as an absent key.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "Option<String>", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A value this client does not know about
            Other(String),
        }

        impl $name {
            /// Wire representation
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => $name::$variant,)+
                    _ => $name::Other(value),
                }
            }
        }

        impl From<Option<String>> for $name {
            fn from(value: Option<String>) -> Self {
                value.map(Self::from).unwrap_or_default()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Other(String::new())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// `null` reads as the field's default, like a missing key.
///
/// Backend rows come from views that leave columns null.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

mod order;
mod comment;
mod ticket;
mod stats;
mod sync;

pub use order::{Order, OrderStatus, Platform};
pub use comment::{Comment, NewComment};
pub use ticket::{NewTicket, Ticket, TicketPriority, TicketStatus, TicketUpdate};
pub use stats::DashboardStats;
pub use sync::SyncReport;
