//! wpharvest core: WordPress data model, row building and progress events.
mod event;
mod model;
mod options;
mod rows;
mod site;

pub use event::{ProgressEvent, Resource};
pub use model::{EmbeddedMedia, Embeds, FlatRow, Post, Rendered, Term, TermMap};
pub use options::{ExportOptions, CSV_BASE_COLUMNS};
pub use rows::{build_row, join_term_names, UNKNOWN_TERM};
pub use site::{SiteUrl, SiteUrlError};
