#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # shelf
//!
//! shelf keeps a personal list of books found by searching the Google Books catalog. The list is
//! held by a [`BookListStore`] which writes the whole list to a [`storage::Storage`] after every
//! change, and a [`Session`] drives searches, edits and deletes against it the way a search
//! screen would.
//!
//! ```no_run
//! use shelf::{file::JsonDirStorage, BookListStore, Session};
//!
//! fn main() -> Result<(), shelf::Error> {
//!     let store = BookListStore::load(JsonDirStorage::new("."));
//!     let mut session = Session::new(store);
//!     let book = session.search("dune")?;
//!     println!("{} by {}", book.title(), book.authors());
//!     Ok(())
//! }
//! ```

mod api;
pub mod book;
mod error;
pub mod file;
mod session;
pub mod storage;
mod store;

pub use api::Client;
pub use book::{BookId, BookRecord, NewBook};
pub use error::{Error, ErrorKind};
pub use session::Session;
pub use store::{BookCollection, BookListStore, STORAGE_KEY};

use log::trace;

type DefaultClient = reqwest::blocking::Client;

/// Search the Google Books catalog for `query` and return the first volume found.
///
/// Nothing is saved, see [`Session::search`] for searching and saving.
///
/// # Errors
///
/// An `Err` with [`ErrorKind::EmptyQuery`] is returned when `query` is blank.
/// An `Err` with [`ErrorKind::NoResults`] is returned when the catalog has no match.
/// An `Err` is returned when the request fails or the response cannot be parsed.
#[inline]
pub fn search_first(query: &str) -> Result<NewBook, Error> {
    trace!("Search first volume for '{query}'");
    if query.trim().is_empty() {
        return Err(Error::empty_query());
    }
    api::google_books::search_first(&DefaultClient::default(), query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_is_rejected_before_searching() {
        let err = search_first("  ").unwrap_err();

        assert_eq!(ErrorKind::EmptyQuery, err.kind());
    }
}
