//! Load Status Components
//!
//! Placeholders shown while a view waits for the backend or after it failed.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class="loading">"Cargando..."</div> }
}

/// Error banner with a retry control
///
/// # Arguments
/// * `message` - What could not be loaded, in the operator's words
/// * `reason` - The underlying error, shown in smaller print
/// * `on_retry` - Runs the failed fetch again
#[component]
pub fn LoadFailed(
    message: &'static str,
    #[prop(into)] reason: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="load-failed">
            <p class="load-failed-message">{message}</p>
            <p class="load-failed-reason">{reason}</p>
            <button
                class="retry-btn"
                on:click=move |_| on_retry.run(())
            >
                "Reintentar"
            </button>
        </div>
    }
}
