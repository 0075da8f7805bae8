use pretty_assertions::assert_eq;
use wpharvest_core::{ExportOptions, ProgressEvent, Resource};

#[test]
fn post_fields_follow_taxonomy_toggles() {
    let all = ExportOptions::default();
    assert_eq!(
        all.post_fields(),
        vec!["link", "title", "content", "featured_media", "categories", "tags"]
    );

    let none = ExportOptions {
        include_categories: false,
        include_tags: false,
    };
    assert_eq!(
        none.post_fields(),
        vec!["link", "title", "content", "featured_media"]
    );
}

#[test]
fn csv_headers_only_list_requested_columns() {
    let categories_only = ExportOptions {
        include_categories: true,
        include_tags: false,
    };
    assert_eq!(
        categories_only.csv_headers(),
        vec!["url", "title", "content", "image_url", "categories"]
    );

    let tags_only = ExportOptions {
        include_categories: false,
        include_tags: true,
    };
    assert_eq!(
        tags_only.csv_headers(),
        vec!["url", "title", "content", "image_url", "tags"]
    );
}

#[test]
fn progress_events_read_as_status_lines() {
    let page = ProgressEvent::PageFetched {
        resource: Resource::Articles,
        page: 2,
        total_pages: 3,
    };
    assert_eq!(page.to_string(), "Fetching articles: Page 2/3");

    let article = ProgressEvent::ArticleProcessed { index: 5, total: 137 };
    assert_eq!(article.to_string(), "Processing article 5/137");

    let fetched = ProgressEvent::ResourceCompleted {
        resource: Resource::Articles,
        count: 137,
    };
    assert_eq!(fetched.to_string(), "Total articles fetched: 137");

    let tags = ProgressEvent::ResourceCompleted {
        resource: Resource::Tags,
        count: 4,
    };
    assert_eq!(tags.to_string(), "All tags have been fetched.");
}

#[test]
fn diagnostics_display_their_message_unprefixed() {
    let error = ProgressEvent::Error("Error 400 while fetching tags page 2".into());
    assert_eq!(error.to_string(), "Error 400 while fetching tags page 2");

    let warning = ProgressEvent::Warning("No articles found.".into());
    assert_eq!(warning.to_string(), "No articles found.");
}

#[test]
fn resources_know_their_api_paths() {
    assert_eq!(Resource::Articles.api_path(), "wp/v2/posts");
    assert_eq!(Resource::Categories.api_path(), "wp/v2/categories");
    assert_eq!(Resource::Tags.api_path(), "wp/v2/tags");
}
