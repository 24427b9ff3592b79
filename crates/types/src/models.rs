use serde::{Deserialize, Serialize};

/// An author as exposed to clients.
///
/// `slug` is empty when the author's name could not be matched against the
/// catalog's author list. The name is kept verbatim in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAuthor {
    pub slug: String,
    pub name: String,
}

impl PublicAuthor {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }

    /// Author known only by name.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::new(String::new(), name)
    }
}

/// A book as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBook {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub thumbnail: String,
    pub authors: Vec<PublicAuthor>,
    pub kind: Option<String>,
    pub genre: Option<String>,
    pub epoch: Option<String>,
}

impl PublicBook {
    /// Name of the first listed author, or an empty string.
    pub fn first_author_name(&self) -> &str {
        self.authors.first().map(|a| a.name.as_str()).unwrap_or("")
    }
}
