//! Name-based lookup of catalog authors.

use std::collections::HashMap;

use lektury_types::PublicAuthor;

use crate::models::RawAuthor;

/// Case-insensitive `name -> author` lookup.
///
/// Built from one snapshot of the author list. When two authors share a name
/// (ignoring case), the one listed last wins.
#[derive(Debug, Clone, Default)]
pub struct AuthorIndex {
    by_name: HashMap<String, RawAuthor>,
}

impl AuthorIndex {
    pub fn new(authors: &[RawAuthor]) -> Self {
        let by_name = authors
            .iter()
            .map(|author| (name_key(&author.name), author.clone()))
            .collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&RawAuthor> {
        self.by_name.get(&name_key(name))
    }

    /// Resolve one display name, keeping it verbatim with an empty slug when
    /// the catalog has no such author.
    pub fn resolve(&self, name: &str) -> PublicAuthor {
        match self.get(name) {
            Some(author) => PublicAuthor::new(author.slug.clone(), author.name.clone()),
            None => PublicAuthor::unresolved(name),
        }
    }

    /// Resolve a comma-separated author string such as `"Jan Kochanowski, Anonim"`.
    ///
    /// Tokens are trimmed and empty ones skipped; every remaining name yields
    /// exactly one author, in input order.
    pub fn resolve_all(&self, authors: &str) -> Vec<PublicAuthor> {
        authors
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| self.resolve(name))
            .collect()
    }
}

fn name_key(name: &str) -> String {
    name.to_lowercase()
}
