use crate::{ExportOptions, FlatRow, Post, TermMap};

/// Rendered for ids missing from the fetched taxonomy snapshot.
pub const UNKNOWN_TERM: &str = "Unknown";

/// Maps ids through `terms` and joins the names with `", "`.
pub fn join_term_names(ids: Option<&[u64]>, terms: &TermMap) -> String {
    ids.unwrap_or_default()
        .iter()
        .map(|id| terms.get(*id).unwrap_or(UNKNOWN_TERM))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flattens one post. Disabled taxonomies stay `None` so the exporter can drop
/// their columns.
pub fn build_row(
    post: &Post,
    image_url: String,
    options: &ExportOptions,
    categories: &TermMap,
    tags: &TermMap,
) -> FlatRow {
    FlatRow {
        url: post.link.clone(),
        title: post.title.rendered.clone(),
        content: post.content.rendered.clone(),
        image_url,
        categories: options
            .include_categories
            .then(|| join_term_names(post.categories.as_deref(), categories)),
        tags: options
            .include_tags
            .then(|| join_term_names(post.tags.as_deref(), tags)),
    }
}
