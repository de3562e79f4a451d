//! Data Hooks
//!
//! Fetch-on-mount for the page views.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use logistica_core::view::{Loadable, ViewLifetime};
use logistica_core::ApiResult;

use crate::context::{use_services, Services};

/// Run `fetch` once when the view mounts and keep its outcome in a signal.
///
/// The returned callback runs the same fetch again (manual retry). Fetches
/// still in flight when the view unmounts are aborted.
pub fn use_loadable<T, F, Fut>(view_tag: &'static str, fetch: F) -> (RwSignal<Loadable<T>>, Callback<()>)
where
    T: Send + Sync + 'static,
    F: Fn(Services) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let services = use_services();
    let state = RwSignal::new(Loadable::Idle);

    let lifetime = ViewLifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.end()
    });

    let run = Callback::new(move |_: ()| {
        log::debug!("[{}] Loading", view_tag);
        state.set(Loadable::Loading);
        let pending = fetch(services.clone());
        let lifetime = lifetime.clone();
        spawn_local(async move {
            if let Some(result) = lifetime.run(pending).await {
                state.set(Loadable::from_result(view_tag, result));
            }
        });
    });

    // Load on mount
    Effect::new(move |_| run.run(()));

    (state, run)
}
