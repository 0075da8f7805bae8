mod common;

use common::{fast_transport, init_logging, post_json, site, TestSink};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wpharvest_core::{ExportOptions, ProgressEvent};
use wpharvest_engine::{harvest, render_csv, FailureKind};

const CATEGORIES_ONLY: ExportOptions = ExportOptions {
    include_categories: true,
    include_tags: false,
};

fn posts(range: std::ops::Range<usize>) -> Value {
    json!(range
        .map(|i| {
            let media = (i % 3 == 0).then_some(i as u64 + 1000);
            let categories: &[u64] = if i % 2 == 0 { &[1] } else { &[2, 99] };
            post_json(i, media, categories)
        })
        .collect::<Vec<_>>())
}

async fn mount_site(server: &MockServer, categories_expected: u64, tags_expected: u64) {
    for (page, body) in [(1, posts(0..100)), (2, posts(100..137))] {
        Mock::given(method("GET"))
            .and(path("/wp-json/wp/v2/posts"))
            .and(query_param("status", "publish"))
            .and(query_param("_fields", "link,title,content,featured_media,categories"))
            .and(query_param("_embed", "wp:featuredmedia"))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .insert_header("X-WP-TotalPages", "2"),
            )
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/categories"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "News"},
            {"id": 2, "name": "Guides"}
        ])))
        .expect(categories_expected)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(tags_expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn two_pages_export_all_rows_with_categories_only() {
    init_logging();
    let server = MockServer::start().await;
    mount_site(&server, 1, 0).await;
    let sink = TestSink::new();

    let report = harvest(
        &fast_transport(),
        &site(&server.uri()),
        &CATEGORIES_ONLY,
        100,
        &sink,
    )
    .await;

    assert!(report.errors.is_empty());
    assert_eq!(report.rows.len(), 137);
    let urls: Vec<&str> = report.rows.iter().map(|row| row.url.as_str()).collect();
    let expected: Vec<String> = (0..137)
        .map(|i| format!("https://blog.example/post-{i}"))
        .collect();
    assert_eq!(urls, expected);
    assert_eq!(report.rows[0].image_url, "https://blog.example/img/1000.jpg");
    assert_eq!(report.rows[1].image_url, "");
    assert_eq!(report.rows[0].categories.as_deref(), Some("News"));
    assert_eq!(report.rows[1].categories.as_deref(), Some("Guides, Unknown"));
    assert_eq!(report.rows[0].tags, None);

    let bytes = render_csv(&report.rows, &CATEGORIES_ONLY).unwrap();
    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(
        headers,
        vec!["url", "title", "content", "image_url", "categories"]
    );
    assert_eq!(reader.records().count(), 137);

    let events = sink.take();
    assert!(events.contains(&ProgressEvent::ArticleProcessed {
        index: 137,
        total: 137
    }));
    assert_eq!(events.last(), Some(&ProgressEvent::Finished { rows: 137 }));
}

#[tokio::test]
async fn repeated_runs_yield_identical_rows() {
    init_logging();
    let server = MockServer::start().await;
    mount_site(&server, 2, 0).await;
    let transport = fast_transport();
    let site = site(&server.uri());

    let first = harvest(&transport, &site, &CATEGORIES_ONLY, 100, &TestSink::new()).await;
    let second = harvest(&transport, &site, &CATEGORIES_ONLY, 100, &TestSink::new()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_site_stops_before_taxonomies() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let sink = TestSink::new();

    let report = harvest(
        &fast_transport(),
        &site(&server.uri()),
        &ExportOptions::default(),
        100,
        &sink,
    )
    .await;

    assert!(report.is_empty());
    assert!(sink
        .take()
        .contains(&ProgressEvent::Warning("No articles found.".into())));
}

#[tokio::test]
async fn taxonomy_failure_is_not_fatal() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(posts(0..2)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/categories"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let report = harvest(
        &fast_transport(),
        &site(&server.uri()),
        &CATEGORIES_ONLY,
        100,
        &TestSink::new(),
    )
    .await;

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].categories.as_deref(), Some("Unknown"));
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, FailureKind::HttpStatus(403));
}
