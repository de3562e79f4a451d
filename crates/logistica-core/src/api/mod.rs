//! REST Client
//!
//! One `reqwest` client bound to the configured API root, exposing the
//! backend's routes grouped by resource. Every call is a fresh round trip:
//! no cache, no retry, no request merging.

mod orders;
mod comments;
mod tickets;
mod dashboard;
mod sync;

#[cfg(test)]
mod tests;

pub use orders::{OrderPage, Orders, MAX_PAGE_LIMIT};
pub use comments::Comments;
pub use tickets::Tickets;
pub use dashboard::Dashboard;
pub use sync::SyncTriggers;

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Typed client for the logistics backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    root: String,
    timeout: Duration,
    http: Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);

        let http = builder
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            root: config.api_root(),
            timeout: config.timeout,
            http,
        })
    }

    /// API root this client talks to, e.g. `https://host/api/v1`
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ========================
    // Call groups
    // ========================

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn comments(&self) -> Comments<'_> {
        Comments { client: self }
    }

    pub fn tickets(&self) -> Tickets<'_> {
        Tickets { client: self }
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard { client: self }
    }

    pub fn sync(&self) -> SyncTriggers<'_> {
        SyncTriggers { client: self }
    }

    // ========================
    // Request plumbing
    // ========================

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.http.patch(self.url(path))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.root, path)
    }

    /// Send a request and decode its JSON body.
    ///
    /// Every failure is logged here once and handed back untouched.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let result = self.execute(request).await;
        if let Err(err) = &result {
            log::error!("API Error: {}", err);
        }
        result
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        // Headers and body share one deadline
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };
        let (status, body) = self
            .within_timeout(exchange)
            .await?
            .map_err(|e| self.transport_error(e))?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()));
        }

        match status {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(body)),
            _ => Err(ApiError::Server {
                status: status.as_u16(),
                body,
            }),
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::Network(err)
        }
    }

    /// The native client enforces the timeout itself.
    #[cfg(not(target_arch = "wasm32"))]
    async fn within_timeout<F: Future>(&self, fut: F) -> ApiResult<F::Output> {
        Ok(fut.await)
    }

    /// `fetch` has no timeout of its own, so race it against a timer.
    #[cfg(target_arch = "wasm32")]
    async fn within_timeout<F: Future>(&self, fut: F) -> ApiResult<F::Output> {
        race_deadline(fut, gloo_timers::future::sleep(self.timeout), self.timeout).await
    }
}

/// Resolve `fut`, or fail with [`ApiError::Timeout`] once `timer` fires.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) async fn race_deadline<F, T>(fut: F, timer: T, timeout: Duration) -> ApiResult<F::Output>
where
    F: Future,
    T: Future,
{
    use futures::future::{select, Either};

    futures::pin_mut!(fut);
    futures::pin_mut!(timer);

    match select(fut, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ApiError::Timeout(timeout)),
    }
}
