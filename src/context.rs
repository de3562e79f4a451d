//! Application Context
//!
//! The API is constructed once in `main` and handed down through Leptos
//! context, so pages never build their own client and tests can swap in a
//! fake.

use std::sync::Arc;

use leptos::prelude::*;
use logistica_core::{ActivityService, ApiClient, OrderService};

/// Backend seams provided via context
#[derive(Clone)]
pub struct Services {
    /// Order lists, single orders and dashboard stats
    pub orders: Arc<dyn OrderService + Send + Sync>,
    /// Comments and tickets for one order
    pub activity: Arc<dyn ActivityService + Send + Sync>,
}

impl Services {
    pub fn new(
        orders: Arc<dyn OrderService + Send + Sync>,
        activity: Arc<dyn ActivityService + Send + Sync>,
    ) -> Self {
        Self { orders, activity }
    }

    /// Both seams backed by the same HTTP client
    pub fn from_client(client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            orders: client.clone(),
            activity: client,
        }
    }
}

pub fn provide_services(services: Services) {
    provide_context(services);
}

pub fn use_services() -> Services {
    use_context::<Services>().expect("Services should be provided")
}
