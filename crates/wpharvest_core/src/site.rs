use std::fmt;

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteUrlError {
    #[error("Invalid URL format. Please include the scheme (http:// or https://).")]
    MissingSchemeOrHost,
    #[error("unsupported URL scheme `{0}`")]
    UnsupportedScheme(String),
    #[error("cannot build endpoint `{path}`: {message}")]
    Endpoint { path: String, message: String },
}

/// Base URL of a WordPress site.
///
/// Keeps any sub-directory path (installs under `/blog` are common) but drops
/// query, fragment and trailing slashes so endpoint paths can be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl {
    base: Url,
}

impl SiteUrl {
    pub fn parse(raw: &str) -> Result<Self, SiteUrlError> {
        let trimmed = raw.trim();
        let mut base = Url::parse(trimmed).map_err(|_| SiteUrlError::MissingSchemeOrHost)?;
        if base.host_str().map_or(true, str::is_empty) {
            return Err(SiteUrlError::MissingSchemeOrHost);
        }
        match base.scheme() {
            "http" | "https" => {}
            other => return Err(SiteUrlError::UnsupportedScheme(other.to_string())),
        }
        base.set_query(None);
        base.set_fragment(None);
        let path = base.path().trim_end_matches('/').to_string();
        base.set_path(&path);
        Ok(Self { base })
    }

    /// `{scheme}://{host[:port]}/wp-json/`, the discovery endpoint.
    pub fn api_root(&self) -> Url {
        let mut root = self.base.clone();
        root.set_path("/wp-json/");
        root
    }

    /// `{base}/wp-json/{path}` for a path such as `wp/v2/posts`.
    pub fn endpoint(&self, path: &str) -> Result<Url, SiteUrlError> {
        let raw = format!(
            "{}/wp-json/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|err| SiteUrlError::Endpoint {
            path: path.to_string(),
            message: err.to_string(),
        })
    }
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::{SiteUrl, SiteUrlError};

    #[test]
    fn missing_scheme_is_rejected() {
        assert_eq!(
            SiteUrl::parse("www.example.com"),
            Err(SiteUrlError::MissingSchemeOrHost)
        );
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert_eq!(
            SiteUrl::parse("ftp://example.com"),
            Err(SiteUrlError::UnsupportedScheme("ftp".into()))
        );
    }

    #[test]
    fn api_root_uses_origin_only() {
        let site = SiteUrl::parse("https://example.com:8443/blog/?p=1#top").unwrap();
        assert_eq!(site.api_root().as_str(), "https://example.com:8443/wp-json/");
    }

    #[test]
    fn endpoints_keep_subdirectory() {
        let site = SiteUrl::parse("https://example.com/blog/").unwrap();
        assert_eq!(
            site.endpoint("wp/v2/posts").unwrap().as_str(),
            "https://example.com/blog/wp-json/wp/v2/posts"
        );
        assert_eq!(site.to_string(), "https://example.com/blog");
    }
}
