//! Dashboard Page
//!
//! Headline counts from `/dashboard/stats`.

use leptos::prelude::*;
use logistica_core::view::{primary_cards, secondary_cards, Loadable, StatCard};

use crate::components::{LoadFailed, Loading};
use crate::context::Services;
use crate::hooks::use_loadable;

#[component]
pub fn Dashboard() -> impl IntoView {
    let (stats, retry) = use_loadable("DASHBOARD", |services: Services| async move {
        services.orders.dashboard_stats().await
    });

    view! {
        <section class="page">
            <h2 class="page-title">"Dashboard"</h2>
            {move || match stats.get() {
                Loadable::Idle | Loadable::Loading => view! { <Loading /> }.into_any(),
                Loadable::Failed(reason) => view! {
                    <LoadFailed
                        message="No se pudieron cargar las estadísticas"
                        reason=reason
                        on_retry=retry
                    />
                }
                .into_any(),
                Loadable::Loaded(stats) => {
                    let secondary = secondary_cards(&stats);
                    view! {
                        <div class="stat-grid">{stat_cards(primary_cards(&stats))}</div>
                        {(!secondary.is_empty()).then(|| view! {
                            <div class="stat-grid secondary">{stat_cards(secondary)}</div>
                        })}
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

fn stat_cards(cards: Vec<StatCard>) -> impl IntoView {
    cards
        .into_iter()
        .map(|card| {
            view! {
                <div class=format!("stat-card {}", card.tone.css_class())>
                    <p class="stat-label">{card.label}</p>
                    <p class="stat-value">{card.value}</p>
                </div>
            }
        })
        .collect_view()
}
