use log::{info, trace, warn};

use crate::{
    book::{BookId, BookRecord},
    storage::Storage,
    Error, ErrorKind,
};

/// The key the whole collection is stored under.
pub const STORAGE_KEY: &str = "books";

/// An insertion ordered list of [`BookRecord`]s, unique by id.
pub type BookCollection = Vec<BookRecord>;

/// Owns the saved [`BookCollection`] and keeps it in sync with a [`Storage`].
///
/// Every mutation rewrites the whole collection to storage. A failed write is logged and
/// otherwise ignored, the in-memory collection is always updated.
#[derive(Debug)]
pub struct BookListStore<S: Storage> {
    storage: S,
    books: BookCollection,
    last_added: Option<BookId>,
}

impl<S: Storage> BookListStore<S> {
    /// Loads the collection from `storage`.
    ///
    /// This never fails, when there is nothing stored or the stored value cannot be read or
    /// parsed then the store starts empty.
    pub fn load(storage: S) -> Self {
        let books = match read_books(&storage) {
            Ok(Some(books)) => {
                info!("Loaded {} books from storage", books.len());
                books
            }
            Ok(None) => {
                trace!("Nothing stored under '{STORAGE_KEY}' - starting with an empty list");
                Vec::new()
            }
            Err(e) => {
                warn!("Stored books could not be read, starting with an empty list: {e}");
                Vec::new()
            }
        };

        let last_added = books.last().map(BookRecord::id);
        Self {
            storage,
            books,
            last_added,
        }
    }

    /// Appends `record` to the end of the collection and persists it.
    ///
    /// A record with an id that is already present is ignored.
    pub fn add(&mut self, record: BookRecord) -> &BookCollection {
        if self.find_by_id(record.id()).is_some() {
            warn!("A book with the id '{}' is already saved", record.id());
            return &self.books;
        }

        trace!("Adding '{}' with id '{}'", record.title(), record.id());
        self.last_added = Some(record.id());
        self.books.push(record);
        self.persist();
        &self.books
    }

    /// Removes the record with `id` and persists the result.
    ///
    /// Nothing is removed when `id` is unknown, but the collection is still written.
    pub fn remove(&mut self, id: BookId) -> &BookCollection {
        let before = self.books.len();
        self.books.retain(|book| book.id() != id);

        if self.books.len() == before {
            trace!("No book found with the id '{id}'");
        } else if self.last_added == Some(id) {
            self.last_added = self.books.last().map(BookRecord::id);
        }

        self.persist();
        &self.books
    }

    /// Returns the record with `id`, if it is saved.
    #[must_use]
    pub fn find_by_id(&self, id: BookId) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.id() == id)
    }

    /// Removes the record with `id` and returns its title so a new search can replace it.
    ///
    /// The replacement gets a new id and is whatever the new search finds first, it is not an
    /// in-place update of the removed record. Returns `None` and leaves the collection untouched
    /// when `id` is unknown.
    pub fn edit(&mut self, id: BookId) -> Option<String> {
        let title = self.find_by_id(id)?.title().to_owned();
        info!("Editing '{title}' - removing it until it is searched again");
        self.remove(id);
        Some(title)
    }

    /// The most recently added record still in the collection.
    ///
    /// After the last added record is removed this is the last record of the collection.
    #[must_use]
    pub fn last_added(&self) -> Option<&BookRecord> {
        self.last_added.and_then(|id| self.find_by_id(id))
    }

    /// The saved records in insertion order.
    #[must_use]
    pub fn books(&self) -> &BookCollection {
        &self.books
    }

    /// The number of saved records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` when no records are saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Gives back the underlying storage.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // drop is not const
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let res = serde_json::to_string(&self.books)
            .map_err(|e| Error::wrap_with(ErrorKind::Serialize, e, "Cannot serialize books"))
            .and_then(|json| self.storage.set(STORAGE_KEY, &json));

        match res {
            Ok(()) => trace!("{} books written to storage", self.books.len()),
            Err(e) => warn!("Books could not be saved: {e}"),
        }
    }
}

fn read_books<S: Storage>(storage: &S) -> Result<Option<BookCollection>, Error> {
    let Some(json) = storage.get(STORAGE_KEY)? else {
        return Ok(None);
    };

    let books: BookCollection = serde_json::from_str(&json).map_err(|e| {
        Error::wrap_with(ErrorKind::Deserialize, e, "Stored books are not valid json")
    })?;

    Ok(Some(dedup_ids(books)))
}

/// Keeps the first record of every id.
fn dedup_ids(books: BookCollection) -> BookCollection {
    let total = books.len();
    let mut seen = std::collections::HashSet::with_capacity(total);
    let books: BookCollection = books
        .into_iter()
        .filter(|book| seen.insert(book.id()))
        .collect();

    if books.len() < total {
        warn!(
            "Dropped {} stored books with an id that was already used",
            total - books.len()
        );
    }
    books
}
