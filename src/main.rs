//! Logistica Frontend Entry Point

use leptos::prelude::*;
use logistica_core::{ApiClient, ApiConfig};
use logistica_ui::app::App;
use logistica_ui::context::Services;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = ApiConfig::from_build_env();
    log::info!("[APP] Backend at {}", config.api_root());

    match ApiClient::new(&config) {
        Ok(client) => {
            let services = Services::from_client(client);
            mount_to_body(move || view! { <App services=services /> });
        }
        Err(err) => {
            log::error!("[APP] Could not build API client: {}", err);
            let reason = err.to_string();
            mount_to_body(move || view! {
                <p class="config-error">"No se pudo iniciar el cliente de la API: " {reason}</p>
            });
        }
    }
}
