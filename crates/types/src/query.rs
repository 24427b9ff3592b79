//! Sort and filter parameters for catalog listings.

/// Field a book listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookSort {
    #[default]
    Title,
    /// Name of the first listed author.
    Author,
}

impl BookSort {
    /// Parse a `sortBy` parameter. Anything other than `author` sorts by title.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("author") => BookSort::Author,
            _ => BookSort::Title,
        }
    }
}

/// Author listings only sort by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorSort {
    #[default]
    Name,
}

impl AuthorSort {
    /// Strict parse; the request layer rejects anything but `name`.
    pub fn parse(value: &str) -> Option<Self> {
        value
            .trim()
            .eq_ignore_ascii_case("name")
            .then_some(AuthorSort::Name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse an `order` parameter. Anything other than `desc` is ascending.
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("asc") {
            Some(SortOrder::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(SortOrder::Desc)
        } else {
            None
        }
    }

    pub fn is_desc(&self) -> bool {
        matches!(self, SortOrder::Desc)
    }
}

/// Optional kind/genre/epoch restrictions, combined with AND.
///
/// Blank values are dropped on construction so an empty query parameter
/// behaves like an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub kind: Option<String>,
    pub genre: Option<String>,
    pub epoch: Option<String>,
}

impl BookFilter {
    pub fn new(kind: Option<String>, genre: Option<String>, epoch: Option<String>) -> Self {
        Self {
            kind: non_blank(kind),
            genre: non_blank(genre),
            epoch: non_blank(epoch),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = non_blank(Some(kind.into()));
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = non_blank(Some(genre.into()));
        self
    }

    pub fn with_epoch(mut self, epoch: impl Into<String>) -> Self {
        self.epoch = non_blank(Some(epoch.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.genre.is_none() && self.epoch.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
