use std::fmt;

/// Collections fetched from the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Articles,
    Categories,
    Tags,
}

impl Resource {
    /// Path below `/wp-json/`.
    pub fn api_path(self) -> &'static str {
        match self {
            Resource::Articles => "wp/v2/posts",
            Resource::Categories => "wp/v2/categories",
            Resource::Tags => "wp/v2/tags",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Resource::Articles => "articles",
            Resource::Categories => "categories",
            Resource::Tags => "tags",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status updates emitted while a run progresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    PageFetched {
        resource: Resource,
        page: u32,
        total_pages: u32,
    },
    ResourceCompleted {
        resource: Resource,
        count: usize,
    },
    ArticleProcessed {
        index: usize,
        total: usize,
    },
    /// Non-fatal problem; the run carries on.
    Warning(String),
    /// A fetch stopped early; results for that resource may be partial.
    Error(String),
    Finished {
        rows: usize,
    },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::PageFetched {
                resource,
                page,
                total_pages,
            } => write!(f, "Fetching {resource}: Page {page}/{total_pages}"),
            ProgressEvent::ResourceCompleted {
                resource: Resource::Articles,
                count,
            } => write!(f, "Total articles fetched: {count}"),
            ProgressEvent::ResourceCompleted { resource, .. } => {
                write!(f, "All {resource} have been fetched.")
            }
            ProgressEvent::ArticleProcessed { index, total } => {
                write!(f, "Processing article {index}/{total}")
            }
            ProgressEvent::Warning(message) | ProgressEvent::Error(message) => {
                f.write_str(message)
            }
            ProgressEvent::Finished { .. } => write!(f, "Processing completed."),
        }
    }
}
