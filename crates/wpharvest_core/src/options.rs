/// Columns every export carries, in order.
pub const CSV_BASE_COLUMNS: [&str; 4] = ["url", "title", "content", "image_url"];

/// Which optional taxonomies a run resolves and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub include_categories: bool,
    pub include_tags: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_categories: true,
            include_tags: true,
        }
    }
}

impl ExportOptions {
    /// `_fields` entries requested for posts.
    pub fn post_fields(&self) -> Vec<&'static str> {
        let mut fields = vec!["link", "title", "content", "featured_media"];
        if self.include_categories {
            fields.push("categories");
        }
        if self.include_tags {
            fields.push("tags");
        }
        fields
    }

    pub fn csv_headers(&self) -> Vec<&'static str> {
        let mut headers = CSV_BASE_COLUMNS.to_vec();
        if self.include_categories {
            headers.push("categories");
        }
        if self.include_tags {
            headers.push("tags");
        }
        headers
    }
}
