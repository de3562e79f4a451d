//! Order Card Component
//!
//! One order in a category list. Clicking opens the detail modal.

use leptos::prelude::*;
use logistica_core::domain::Order;
use logistica_core::format::{format_currency, format_date, MISSING};
use logistica_core::view::{platform_tone, OrderCategory};

use super::Badge;

#[component]
pub fn OrderCard(
    order: Order,
    category: OrderCategory,
    #[prop(into)] on_select: Callback<Order>,
) -> impl IntoView {
    let number = order.display_number().to_string();
    let customer = order.customer_name.clone().unwrap_or_else(|| MISSING.to_string());
    let city = order.shipping_city.clone().unwrap_or_else(|| MISSING.to_string());
    let deadline = format_date(order.limite_despacho.as_deref());
    let platform = order.platform.label().to_string();
    let platform_class = platform_tone(&order.platform);
    let badge = category.badge_text(&order);
    // Only today's list shows the amount
    let amount = (category == OrderCategory::Today).then(|| format_currency(order.total_amount));

    view! {
        <div
            class=format!("order-card {}", category.tone().css_class())
            on:click=move |_| on_select.run(order.clone())
        >
            <div class="order-card-header">
                <span class="order-number">"Orden #" {number}</span>
                <Badge tone=category.tone() label=badge />
            </div>
            <div class="order-card-body">
                <p class="order-customer">{customer}</p>
                <p class="order-meta">
                    <Badge tone=platform_class label=platform />
                    <span class="order-city">{city}</span>
                </p>
                <p class="order-deadline">{category.deadline_label()} ": " {deadline}</p>
                {amount.map(|amount| view! { <p class="order-amount">{amount}</p> })}
            </div>
        </div>
    }
}
