//! Layout Component
//!
//! Header with the app title and navigation, page content below.

use leptos::prelude::*;
use leptos_router::components::A;
use logistica_core::view::OrderCategory;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1 class="app-title">"Sistema Logística"</h1>
                <nav class="app-nav">
                    <span class="nav-link">
                        <A href="/">"Dashboard"</A>
                    </span>
                    {OrderCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <span class=format!("nav-link {}", category.tone().css_class())>
                                    <A href=category.path()>{category.nav_label()}</A>
                                </span>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
