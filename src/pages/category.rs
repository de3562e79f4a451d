//! Order Category Page
//!
//! Today, delayed and at-risk orders. Each route fetches its own endpoint
//! and shares the list and detail modal.

use leptos::prelude::*;
use logistica_core::domain::Order;
use logistica_core::view::{fetch_orders, OrderCategory};

use crate::components::{OrderDetailModal, OrderList};
use crate::context::Services;
use crate::hooks::use_loadable;

#[component]
pub fn CategoryPage(category: OrderCategory) -> impl IntoView {
    let (orders, retry) = use_loadable(category.log_tag(), move |services: Services| async move {
        fetch_orders(services.orders.as_ref(), category).await
    });
    let (selected, set_selected) = signal::<Option<Order>>(None);

    view! {
        <section class="page">
            <h2 class=format!("page-title {}", category.tone().css_class())>{category.title()}</h2>
            <OrderList
                category=category
                state=orders
                on_retry=retry
                on_select=Callback::new(move |order: Order| set_selected.set(Some(order)))
            />
            {move || selected.get().map(|order| view! {
                <OrderDetailModal
                    order=order
                    on_close=Callback::new(move |_: ()| set_selected.set(None))
                />
            })}
        </section>
    }
}
