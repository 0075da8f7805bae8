use engine_logging::engine_info;
use wpharvest_core::{ExportOptions, Post, ProgressEvent, Resource, SiteUrl, Term, TermMap};

use crate::paginate::{fetch_all_pages, PageWalk};
use crate::transport::{ProgressSink, Transport};
use crate::{FailureKind, FetchError};

/// A taxonomy lookup plus the error that cut its fetch short, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct TermFetch {
    pub terms: TermMap,
    pub error: Option<FetchError>,
}

/// Walks `/wp/v2/posts?status=publish` requesting only the fields the export
/// needs, with the featured image embedded inline.
pub async fn fetch_published_posts(
    transport: &dyn Transport,
    site: &SiteUrl,
    options: &ExportOptions,
    per_page: u32,
    sink: &dyn ProgressSink,
) -> PageWalk<Post> {
    let endpoint = match site.endpoint(Resource::Articles.api_path()) {
        Ok(endpoint) => endpoint,
        Err(err) => return failed_walk(err.to_string(), sink),
    };
    let params = [
        ("status", "publish".to_string()),
        ("_fields", options.post_fields().join(",")),
        ("_embed", "wp:featuredmedia".to_string()),
    ];
    let walk = fetch_all_pages(
        transport,
        &endpoint,
        &params,
        per_page,
        Resource::Articles,
        sink,
    )
    .await;
    engine_info!(
        "fetched {} articles over {} page(s)",
        walk.items.len(),
        walk.pages_fetched
    );
    walk
}

/// Walks a taxonomy collection and reduces it to an id → name map.
pub async fn fetch_terms(
    transport: &dyn Transport,
    site: &SiteUrl,
    resource: Resource,
    per_page: u32,
    sink: &dyn ProgressSink,
) -> TermFetch {
    let walk: PageWalk<Term> = match site.endpoint(resource.api_path()) {
        Ok(endpoint) => fetch_all_pages(transport, &endpoint, &[], per_page, resource, sink).await,
        Err(err) => failed_walk(err.to_string(), sink),
    };
    let terms = TermMap::from_terms(walk.items);
    engine_info!("fetched {} {}", terms.len(), resource);
    sink.emit(ProgressEvent::ResourceCompleted {
        resource,
        count: terms.len(),
    });
    TermFetch {
        terms,
        error: walk.error,
    }
}

fn failed_walk<T>(message: String, sink: &dyn ProgressSink) -> PageWalk<T> {
    sink.emit(ProgressEvent::Error(message.clone()));
    PageWalk {
        items: Vec::new(),
        pages_fetched: 0,
        error: Some(FetchError::new(FailureKind::InvalidUrl, message)),
    }
}
