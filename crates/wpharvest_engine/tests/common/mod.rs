#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use serde_json::{json, Value};
use wpharvest_core::{ProgressEvent, SiteUrl};
use wpharvest_engine::{FetchSettings, ProgressSink, ReqwestTransport, RetryPolicy};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

#[derive(Default)]
pub struct TestSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl TestSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Settings with the default retry rules but millisecond backoff.
pub fn fast_settings() -> FetchSettings {
    FetchSettings {
        request_timeout: Duration::from_secs(5),
        retry: RetryPolicy {
            backoff_factor: Duration::from_millis(5),
            ..RetryPolicy::default()
        },
        ..FetchSettings::default()
    }
}

pub fn fast_transport() -> ReqwestTransport {
    ReqwestTransport::new(&fast_settings()).unwrap()
}

pub fn site(server_uri: &str) -> SiteUrl {
    SiteUrl::parse(server_uri).unwrap()
}

pub fn post_json(id: usize, media: Option<u64>, categories: &[u64]) -> Value {
    let mut post = json!({
        "link": format!("https://blog.example/post-{id}"),
        "title": {"rendered": format!("Post {id}")},
        "content": {"rendered": format!("<p>Body {id}</p>")},
        "featured_media": media.unwrap_or(0),
        "categories": categories,
    });
    if let Some(media_id) = media {
        post["_embedded"] = json!({
            "wp:featuredmedia": [{
                "id": media_id,
                "source_url": format!("https://blog.example/img/{media_id}.jpg"),
            }]
        });
    }
    post
}
