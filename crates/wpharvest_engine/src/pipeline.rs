use engine_logging::engine_info;
use wpharvest_core::{
    build_row, ExportOptions, FlatRow, ProgressEvent, Resource, SiteUrl, TermMap,
};

use crate::media::resolve_image_url;
use crate::resources::{fetch_published_posts, fetch_terms};
use crate::transport::{ProgressSink, Transport};
use crate::FetchError;

/// Rows gathered by one run plus the fetch errors that made parts of it
/// partial.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HarvestReport {
    pub rows: Vec<FlatRow>,
    pub errors: Vec<FetchError>,
}

impl HarvestReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Runs one export: posts, then the enabled taxonomies, then one row per post
/// in fetch order. Requests are issued strictly one after another.
pub async fn harvest(
    transport: &dyn Transport,
    site: &SiteUrl,
    options: &ExportOptions,
    per_page: u32,
    sink: &dyn ProgressSink,
) -> HarvestReport {
    let mut report = HarvestReport::default();

    let posts = fetch_published_posts(transport, site, options, per_page, sink).await;
    report.errors.extend(posts.error);
    let posts = posts.items;
    if posts.is_empty() {
        sink.emit(ProgressEvent::Warning("No articles found.".to_string()));
        return report;
    }
    sink.emit(ProgressEvent::ResourceCompleted {
        resource: Resource::Articles,
        count: posts.len(),
    });

    let categories = if options.include_categories {
        let fetched = fetch_terms(transport, site, Resource::Categories, per_page, sink).await;
        report.errors.extend(fetched.error);
        fetched.terms
    } else {
        TermMap::new()
    };
    let tags = if options.include_tags {
        let fetched = fetch_terms(transport, site, Resource::Tags, per_page, sink).await;
        report.errors.extend(fetched.error);
        fetched.terms
    } else {
        TermMap::new()
    };

    let total = posts.len();
    report.rows.reserve(total);
    for (index, post) in posts.iter().enumerate() {
        sink.emit(ProgressEvent::ArticleProcessed {
            index: index + 1,
            total,
        });
        let image_url = resolve_image_url(transport, site, post, sink).await;
        report
            .rows
            .push(build_row(post, image_url, options, &categories, &tags));
    }

    engine_info!(
        "built {} rows from {} ({} fetch error(s))",
        report.rows.len(),
        site,
        report.errors.len()
    );
    sink.emit(ProgressEvent::Finished {
        rows: report.rows.len(),
    });
    report
}
