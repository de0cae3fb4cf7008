//! The records kept in a book list.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text used for `authors` when the catalog has none.
pub const UNKNOWN_AUTHORS: &str = "Autor desconocido";
/// Text used for `publishedDate` when the catalog has none.
pub const UNKNOWN_DATE: &str = "Fecha desconocida";
/// Text used for `categories` when the catalog has none.
pub const UNKNOWN_CATEGORIES: &str = "Categoría desconocida";

/// Opaque identifier of a [`BookRecord`], generated when the record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A normalized catalog entry that has not been given an identity yet.
///
/// Every text field already has the fallback policy applied, so turning this into a
/// [`BookRecord`] cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    /// Title of the volume.
    pub title: String,
    /// Authors joined by `", "`.
    pub authors: String,
    /// Publication date as reported by the catalog.
    pub published_date: String,
    /// Categories joined by `", "`.
    pub categories: String,
    /// Thumbnail url.
    pub image: Option<String>,
}

/// One book retained in the list.
///
/// Records are never changed once created, an edit removes the record and a later search
/// creates a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    id: BookId,
    title: String,
    authors: String,
    published_date: String,
    categories: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl BookRecord {
    /// The identifier of this record.
    #[must_use]
    pub const fn id(&self) -> BookId {
        self.id
    }

    /// The title of the book.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The authors of the book, or [`UNKNOWN_AUTHORS`].
    #[must_use]
    pub fn authors(&self) -> &str {
        &self.authors
    }

    /// The publication date, or [`UNKNOWN_DATE`].
    #[must_use]
    pub fn published_date(&self) -> &str {
        &self.published_date
    }

    /// The categories of the book, or [`UNKNOWN_CATEGORIES`].
    #[must_use]
    pub fn categories(&self) -> &str {
        &self.categories
    }

    /// The thumbnail url, if the catalog had one.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

impl From<NewBook> for BookRecord {
    fn from(book: NewBook) -> Self {
        let NewBook {
            title,
            authors,
            published_date,
            categories,
            image,
        } = book;

        Self {
            id: BookId::new(),
            title,
            authors,
            published_date,
            categories,
            image,
        }
    }
}

/// Joins a list of names with `", "`, falling back to `fallback` when there are none.
pub(crate) fn join_or(values: Option<Vec<String>>, fallback: &str) -> String {
    match values {
        Some(values) if !values.is_empty() => values.join(", "),
        _ => fallback.to_owned(),
    }
}

#[cfg(test)]
pub(crate) fn dune() -> NewBook {
    NewBook {
        title: "Dune".to_owned(),
        authors: "Frank Herbert".to_owned(),
        published_date: "1965".to_owned(),
        categories: "Science Fiction".to_owned(),
        image: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_from_new_book_keeps_fields_and_gets_an_id() {
        let a = BookRecord::from(dune());
        let b = BookRecord::from(dune());

        assert_eq!("Dune", a.title());
        assert_eq!("Frank Herbert", a.authors());
        assert_eq!("1965", a.published_date());
        assert_eq!("Science Fiction", a.categories());
        assert_eq!(None, a.image());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn json_uses_camel_case_and_omits_absent_image() {
        let record = BookRecord::from(dune());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["publishedDate"], "1965");
        assert_eq!(json["id"], record.id().to_string());
        assert!(json.get("image").is_none());
    }

    #[test]
    fn null_image_deserializes_as_absent() {
        let json = r#"{
            "id": "0b5a9c62-3f43-4f9e-8d43-4d6c3b0c1c11",
            "title": "Dune",
            "authors": "Frank Herbert",
            "publishedDate": "1965",
            "categories": "Science Fiction",
            "image": null
        }"#;
        let record: BookRecord = serde_json::from_str(json).unwrap();

        assert_eq!(None, record.image());
        assert_eq!(
            "0b5a9c62-3f43-4f9e-8d43-4d6c3b0c1c11".parse::<BookId>().unwrap(),
            record.id()
        );
    }

    #[test]
    fn join_or_falls_back_on_missing_or_empty_lists() {
        assert_eq!(UNKNOWN_AUTHORS, join_or(None, UNKNOWN_AUTHORS));
        assert_eq!(UNKNOWN_AUTHORS, join_or(Some(vec![]), UNKNOWN_AUTHORS));
        assert_eq!(
            "Terry Pratchett, Neil Gaiman",
            join_or(
                Some(vec!["Terry Pratchett".to_owned(), "Neil Gaiman".to_owned()]),
                UNKNOWN_AUTHORS
            )
        );
    }
}
