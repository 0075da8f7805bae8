use std::collections::BTreeMap;

use serde::Deserialize;

/// A `{ "rendered": "..." }` wrapper as the REST API returns titles and content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// One entry of `_embedded["wp:featuredmedia"]`.
///
/// Embedded entries may be error objects (e.g. `rest_forbidden`) without a
/// `source_url`, so every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct EmbeddedMedia {
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Embeds {
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<EmbeddedMedia>,
}

/// A published post as returned by `/wp-json/wp/v2/posts` with a restricted
/// `_fields` set. Missing fields fall back to empty values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub featured_media: Option<u64>,
    #[serde(default)]
    pub categories: Option<Vec<u64>>,
    #[serde(default)]
    pub tags: Option<Vec<u64>>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embeds>,
}

impl Post {
    /// Featured media id, treating WordPress' `0` placeholder as absent.
    pub fn featured_media_id(&self) -> Option<u64> {
        self.featured_media.filter(|id| *id != 0)
    }

    /// `source_url` of the first embedded featured-media entry, if usable.
    pub fn embedded_source_url(&self) -> Option<&str> {
        self.embedded
            .as_ref()
            .and_then(|embeds| embeds.featured_media.first())
            .and_then(|media| media.source_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// A category or tag; only the fields needed for name lookup are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Term {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Read-only id → name lookup built once per run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TermMap {
    names: BTreeMap<u64, String>,
}

impl TermMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map; later duplicates overwrite earlier ones.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let names = terms.into_iter().map(|term| (term.id, term.name)).collect();
        Self { names }
    }

    pub fn get(&self, id: u64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<Term> for TermMap {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

/// One exported CSV record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlatRow {
    pub url: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub categories: Option<String>,
    pub tags: Option<String>,
}
