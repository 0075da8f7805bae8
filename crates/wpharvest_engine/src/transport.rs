use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};
use reqwest::header::RETRY_AFTER;
use url::Url;
use wpharvest_core::ProgressEvent;

use crate::retry::RetryPolicy;
use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Items per collection page; the REST API refuses more than 100.
    pub per_page: u32,
    pub user_agent: String,
    pub retry: RetryPolicy,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            per_page: 100,
            user_agent: concat!("wpharvest/", env!("CARGO_PKG_VERSION")).to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

/// Receives progress and diagnostics; front ends decide how to show them.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ProgressEvent);
}

/// A fully read response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// GET-only HTTP seam shared by every fetch of a run.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError>;
}

/// reqwest-backed transport carrying the run's retry policy.
///
/// One instance is built per run and passed by reference, so connections and
/// the policy are shared by all requests.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl ReqwestTransport {
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            client,
            retry: settings.retry.clone(),
        })
    }

    async fn send_once(&self, url: &Url) -> Result<reqwest::Response, FetchError> {
        self.client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        let mut retries = 0;
        loop {
            engine_debug!("GET {} (retry {})", url, retries);
            match self.send_once(url).await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    if self.retry.retries_status(status) && retries < self.retry.max_retries {
                        retries += 1;
                        let retry_after = response
                            .headers()
                            .get(RETRY_AFTER)
                            .and_then(|value| value.to_str().ok());
                        let delay = self.retry.delay_for_status(retries, status, retry_after);
                        drop(response);
                        engine_warn!(
                            "GET {} returned {}; retry {}/{} in {:?}",
                            url,
                            status,
                            retries,
                            self.retry.max_retries,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return read_response(response).await;
                }
                Err(err) if err.is_transient() && retries < self.retry.max_retries => {
                    retries += 1;
                    let delay = self.retry.backoff(retries);
                    engine_warn!(
                        "GET {} failed ({}); retry {}/{} in {:?}",
                        url,
                        err,
                        retries,
                        self.retry.max_retries,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

async fn read_response(response: reqwest::Response) -> Result<HttpResponse, FetchError> {
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = response.bytes().await.map_err(map_reqwest_error)?.to_vec();
    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_builder() {
        return FetchError::new(FailureKind::InvalidUrl, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
