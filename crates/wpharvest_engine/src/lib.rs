//! wpharvest engine: HTTP transport, REST fetchers and CSV export.
mod export;
mod media;
mod paginate;
mod persist;
mod pipeline;
mod resources;
mod retry;
mod transport;
mod types;
mod validate;

pub use export::{export_csv, render_csv, ExportError, ExportSummary, DEFAULT_OUTPUT_FILENAME};
pub use media::resolve_image_url;
pub use paginate::{fetch_all_pages, PageWalk, MAX_PER_PAGE, TOTAL_PAGES_HEADER};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{harvest, HarvestReport};
pub use resources::{fetch_published_posts, fetch_terms, TermFetch};
pub use retry::RetryPolicy;
pub use transport::{FetchSettings, HttpResponse, ProgressSink, ReqwestTransport, Transport};
pub use types::{FailureKind, FetchError};
pub use validate::{validate_site, ValidationError};
