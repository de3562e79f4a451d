//! Badge Component

use leptos::prelude::*;
use logistica_core::view::BadgeTone;

/// Rounded colored label
#[component]
pub fn Badge(tone: BadgeTone, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class=format!("badge {}", tone.css_class())>{label}</span>
    }
}
