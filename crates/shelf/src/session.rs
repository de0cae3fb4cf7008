use log::trace;

use crate::{
    api::{google_books, Client},
    book::{BookId, BookRecord},
    storage::Storage,
    store::BookListStore,
    Error, ErrorKind,
};

/// The state a book search screen keeps around a [`BookListStore`].
///
/// A session remembers the current query text, the record on display and the last error
/// reported to the user. All actions take `&mut self` so a search always completes before the
/// next action can start.
pub struct Session<S: Storage, C: Client = reqwest::blocking::Client> {
    store: BookListStore<S>,
    client: C,
    query: String,
    detail: Option<BookRecord>,
    error: Option<ErrorKind>,
}

impl<S: Storage> Session<S> {
    /// Starts a session using the default HTTP client.
    pub fn new(store: BookListStore<S>) -> Self {
        Self::with_client(store, reqwest::blocking::Client::default())
    }
}

impl<S: Storage, C: Client> Session<S, C> {
    /// Starts a session that searches with `client`.
    pub fn with_client(store: BookListStore<S>, client: C) -> Self {
        let detail = store.last_added().cloned();
        Self {
            store,
            client,
            query: String::new(),
            detail,
            error: None,
        }
    }

    /// Searches the catalog for `query` and saves the first match.
    ///
    /// On success the new record is also the record on display.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::EmptyQuery`] when `query` is blank, nothing else changes.
    /// [`ErrorKind::NoResults`] when nothing matched, the record on display is cleared.
    /// Any other error from the search provider is returned without changing any state.
    pub fn search(&mut self, query: &str) -> Result<&BookRecord, Error> {
        self.query = query.to_owned();

        if query.trim().is_empty() {
            trace!("Blank query - nothing to search for");
            self.error = Some(ErrorKind::EmptyQuery);
            return Err(Error::empty_query());
        }
        self.error = None;

        let book = match google_books::search_first(&self.client, query) {
            Ok(book) => book,
            Err(e) => {
                if e.kind() == ErrorKind::NoResults {
                    trace!("Clearing the record on display");
                    self.detail = None;
                }
                self.error = Some(e.kind());
                return Err(e);
            }
        };

        let record = BookRecord::from(book);
        self.store.add(record.clone());
        Ok(&*self.detail.insert(record))
    }

    /// Removes the record with `id` and puts its title in the query, ready to search again.
    ///
    /// Returns the title, or `None` when `id` is unknown.
    pub fn edit(&mut self, id: BookId) -> Option<&str> {
        let title = self.store.edit(id)?;
        self.query = title;
        self.refresh_detail();
        Some(self.query.as_str())
    }

    /// Removes the record with `id`.
    pub fn delete(&mut self, id: BookId) {
        self.store.remove(id);
        self.refresh_detail();
    }

    /// Empties the query text.
    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// The current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The record on display, if any.
    #[must_use]
    pub const fn detail(&self) -> Option<&BookRecord> {
        self.detail.as_ref()
    }

    /// The kind of the last error reported by [`Session::search`].
    #[must_use]
    pub const fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    /// The store backing this session.
    #[must_use]
    pub const fn store(&self) -> &BookListStore<S> {
        &self.store
    }

    fn refresh_detail(&mut self) {
        self.detail = self.store.last_added().cloned();
    }
}
