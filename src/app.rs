//! Logistica Frontend App
//!
//! Router and shell. Every route renders inside the same layout.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;
use logistica_core::view::OrderCategory;

use crate::components::Layout;
use crate::context::{provide_services, Services};
use crate::pages::{CategoryPage, Dashboard};

#[component]
pub fn App(services: Services) -> impl IntoView {
    // Provide the API to every page
    provide_services(services);

    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <p class="empty-state">"Página no encontrada"</p> }>
                    <Route path=StaticSegment("") view=Dashboard />
                    <Route
                        path=StaticSegment("today")
                        view=|| view! { <CategoryPage category=OrderCategory::Today /> }
                    />
                    <Route
                        path=StaticSegment("delayed")
                        view=|| view! { <CategoryPage category=OrderCategory::Delayed /> }
                    />
                    <Route
                        path=StaticSegment("at-risk")
                        view=|| view! { <CategoryPage category=OrderCategory::AtRisk /> }
                    />
                </Routes>
            </Layout>
        </Router>
    }
}
