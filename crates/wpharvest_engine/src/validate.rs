use engine_logging::engine_info;
use wpharvest_core::{SiteUrl, SiteUrlError};

use crate::transport::Transport;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidUrl(#[from] SiteUrlError),
    #[error("REST API returned status code {0}.")]
    Status(u16),
    #[error("Could not connect to the REST API: {0}")]
    Unreachable(String),
}

/// Probes `{scheme}://{host}/wp-json/` once and accepts the site on a 200.
///
/// The transport passed in should carry a disabled retry policy; the probe is
/// meant to fail fast.
pub async fn validate_site(
    transport: &dyn Transport,
    raw_url: &str,
) -> Result<SiteUrl, ValidationError> {
    let site = SiteUrl::parse(raw_url)?;
    let api_root = site.api_root();
    let response = transport
        .get(&api_root)
        .await
        .map_err(|err| ValidationError::Unreachable(err.to_string()))?;
    if !response.is_ok() {
        return Err(ValidationError::Status(response.status));
    }
    engine_info!("REST API root reachable at {}", api_root);
    Ok(site)
}
