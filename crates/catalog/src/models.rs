//! Records as returned by the vendor catalog API.
//!
//! Missing or `null` string fields decode to empty strings; unknown fields are
//! ignored. These types never leave the catalog crate's public surface in a
//! mutated form: once decoded they are shared read-only out of the cache.

use serde::{Deserialize, Deserializer};

/// One entry of `books/` or `authors/{slug}/books/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawBook {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover_thumb: String,
    /// Comma-separated display names, not slugs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub epoch: String,
}

/// One entry of `authors/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawAuthor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,
}

/// Payload of `books/{slug}/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawBookDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cover_thumb: String,
    #[serde(default)]
    pub fragment_data: Option<FragmentData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<NamedRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kinds: Vec<NamedRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<NamedRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub epochs: Vec<NamedRef>,
}

impl RawBookDetail {
    pub fn kind(&self) -> Option<&str> {
        first_name(&self.kinds)
    }

    pub fn genre(&self) -> Option<&str> {
        first_name(&self.genres)
    }

    pub fn epoch(&self) -> Option<&str> {
        first_name(&self.epochs)
    }

    /// The HTML description fragment, if the catalog supplied one.
    pub fn description_html(&self) -> Option<&str> {
        self.fragment_data.as_ref().map(|f| f.html.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FragmentData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub html: String,
}

/// A `(name, slug)` pair embedded in a detail payload: an author, kind,
/// genre or epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
}

impl NamedRef {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

fn first_name(refs: &[NamedRef]) -> Option<&str> {
    refs.first().map(|r| r.name.as_str())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
