use engine_logging::engine_debug;
use serde::Deserialize;
use wpharvest_core::{Post, ProgressEvent, SiteUrl};

use crate::transport::{ProgressSink, Transport};

#[derive(Debug, Deserialize)]
struct MediaItem {
    #[serde(default)]
    source_url: Option<String>,
}

/// Featured image URL of `post`, or an empty string.
///
/// Uses the embedded media when present and only falls back to a single
/// `/wp/v2/media/{id}` lookup when it is not. Lookup failures are reported to
/// `sink` as warnings and never fail the run.
pub async fn resolve_image_url(
    transport: &dyn Transport,
    site: &SiteUrl,
    post: &Post,
    sink: &dyn ProgressSink,
) -> String {
    let Some(media_id) = post.featured_media_id() else {
        return String::new();
    };
    if let Some(url) = post.embedded_source_url() {
        return url.to_string();
    }

    engine_debug!("media {} not embedded; fetching directly", media_id);
    match lookup_media(transport, site, media_id).await {
        Ok(url) => url,
        Err(message) => {
            sink.emit(ProgressEvent::Warning(message));
            String::new()
        }
    }
}

async fn lookup_media(
    transport: &dyn Transport,
    site: &SiteUrl,
    media_id: u64,
) -> Result<String, String> {
    let failed = |reason: String| format!("Failed to fetch media ID {media_id}: {reason}");

    let url = site
        .endpoint(&format!("wp/v2/media/{media_id}"))
        .map_err(|err| failed(err.to_string()))?;
    let response = transport
        .get(&url)
        .await
        .map_err(|err| failed(err.to_string()))?;
    if !response.is_ok() {
        return Err(failed(format!("status code {}", response.status)));
    }
    let item: MediaItem =
        serde_json::from_slice(&response.body).map_err(|err| failed(err.to_string()))?;
    Ok(item.source_url.unwrap_or_default())
}
