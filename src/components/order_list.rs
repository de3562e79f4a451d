//! Order List Component
//!
//! Body of the three category pages: loading, failure, empty or cards.

use leptos::prelude::*;
use logistica_core::domain::Order;
use logistica_core::view::{list_view, ListView, Loadable, OrderCategory};

use super::{LoadFailed, Loading, OrderCard};

#[component]
pub fn OrderList(
    category: OrderCategory,
    state: RwSignal<Loadable<Vec<Order>>>,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into)] on_select: Callback<Order>,
) -> impl IntoView {
    let render = move || {
        state.with(|current| match list_view(category, current) {
            ListView::Loading => view! { <Loading /> }.into_any(),
            ListView::Failed { message, reason } => {
                view! { <LoadFailed message=message reason=reason on_retry=on_retry /> }.into_any()
            }
            ListView::Empty(message) => {
                let class = if category.empty_is_good() { "empty-state good" } else { "empty-state" };
                view! { <p class=class>{message}</p> }.into_any()
            }
            ListView::Orders(orders) => view! {
                <div class="order-grid">
                    {orders
                        .iter()
                        .cloned()
                        .map(|order| view! { <OrderCard order=order category=category on_select=on_select /> })
                        .collect_view()}
                </div>
            }
            .into_any(),
        })
    };

    view! { <div class="order-list">{render}</div> }
}
