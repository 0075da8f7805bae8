use engine_logging::{engine_debug, engine_warn};
use serde::de::DeserializeOwned;
use url::Url;
use wpharvest_core::{ProgressEvent, Resource};

use crate::transport::{HttpResponse, ProgressSink, Transport};
use crate::{FailureKind, FetchError};

/// Hard upper bound the REST API enforces for `per_page`.
pub const MAX_PER_PAGE: u32 = 100;
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

/// Result of walking a paginated collection.
///
/// `items` holds everything gathered before `error` (if any) stopped the walk.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWalk<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
    pub error: Option<FetchError>,
}

/// Fetches `page=1..=total` of `endpoint`, appending `params` and `per_page`
/// to every request, until the total-page header is reached or a request
/// fails.
pub async fn fetch_all_pages<T: DeserializeOwned>(
    transport: &dyn Transport,
    endpoint: &Url,
    params: &[(&str, String)],
    per_page: u32,
    resource: Resource,
    sink: &dyn ProgressSink,
) -> PageWalk<T> {
    let per_page = per_page.clamp(1, MAX_PER_PAGE).to_string();
    let mut walk = PageWalk {
        items: Vec::new(),
        pages_fetched: 0,
        error: None,
    };
    let mut page: u32 = 1;

    loop {
        let mut url = endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
            query.append_pair("per_page", &per_page);
            query.append_pair("page", &page.to_string());
        }

        let outcome = match transport.get(&url).await {
            Ok(response) if response.is_ok() => decode_page::<T>(&response).map(|items| {
                let total = total_pages(&response);
                (items, total)
            }),
            Ok(response) => Err(FetchError::new(
                FailureKind::HttpStatus(response.status),
                format!("{resource} page {page}"),
            )),
            Err(err) => Err(err),
        };

        match outcome {
            Ok((items, total)) => {
                engine_debug!("{} page {}/{}: {} items", resource, page, total, items.len());
                walk.items.extend(items);
                walk.pages_fetched = page;
                sink.emit(ProgressEvent::PageFetched {
                    resource,
                    page,
                    total_pages: total,
                });
                if page >= total {
                    break;
                }
                page += 1;
            }
            Err(err) => {
                let message = match err.kind {
                    FailureKind::HttpStatus(code) => {
                        format!("Error {code} while fetching {resource} page {page}")
                    }
                    _ => format!("An error occurred while fetching {resource}: {err}"),
                };
                sink.emit(ProgressEvent::Error(message));
                walk.error = Some(err);
                break;
            }
        }
    }

    walk
}

fn decode_page<T: DeserializeOwned>(response: &HttpResponse) -> Result<Vec<T>, FetchError> {
    serde_json::from_slice(&response.body)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
}

fn total_pages(response: &HttpResponse) -> u32 {
    match response.header(TOTAL_PAGES_HEADER) {
        None => 1,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            engine_warn!("ignoring unparsable {} header {:?}", TOTAL_PAGES_HEADER, raw);
            1
        }),
    }
}
