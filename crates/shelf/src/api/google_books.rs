use log::{info, trace};
use serde::Deserialize;

use crate::book::{join_or, NewBook, UNKNOWN_AUTHORS, UNKNOWN_CATEGORIES, UNKNOWN_DATE};

use super::{Client, Error, ErrorKind};

const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Searches the Google Books catalog and normalizes the first volume found.
pub(crate) fn search_first<C: Client>(client: &C, query: &str) -> Result<NewBook, Error> {
    info!("Searching for '{}' using Google Books API", query);
    let url = search_url(query)?;

    let GoogleModel { items } = client.get_json(&url)?;
    trace!("Request was successful");

    items
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(Error::no_results)
        .and_then(|item| NewBook::try_from(item.volume_info))
}

fn search_url(query: &str) -> Result<String, Error> {
    reqwest::Url::parse_with_params(GOOGLE_BOOKS_URL, &[("q", query)])
        .map(String::from)
        .map_err(|e| Error::wrap_with(ErrorKind::IO, e, "Cannot build the search url"))
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct GoogleModel {
    /// Missing entirely when there are no matches.
    items: Option<Vec<Item>>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Item {
    #[serde(rename = "volumeInfo")]
    volume_info: VolumeInfo,
}

/// Volume information from the Google Book API, any of which may be missing.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
    categories: Option<Vec<String>>,
    #[serde(rename = "imageLinks")]
    image_links: Option<ImageLinks>,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct ImageLinks {
    thumbnail: Option<String>,
}

impl TryFrom<VolumeInfo> for NewBook {
    type Error = Error;

    fn try_from(info: VolumeInfo) -> Result<Self, Error> {
        let VolumeInfo {
            title,
            authors,
            published_date,
            categories,
            image_links,
        } = info;

        // a record cannot exist without a title so treat the volume as no match
        let title = title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(Error::no_results)?;

        Ok(Self {
            title,
            authors: join_or(authors, UNKNOWN_AUTHORS),
            published_date: published_date.unwrap_or_else(|| UNKNOWN_DATE.to_owned()),
            categories: join_or(categories, UNKNOWN_CATEGORIES),
            image: image_links.and_then(|links| links.thumbnail),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{impl_json_producer, MockJsonClient, NetworkErrorProducer};

    impl_json_producer! {
        ValidJsonProducer => Ok(include_str!("../../tests/data/google_book_json.txt").to_owned()),
        NoItemsProducer => Ok(r#"{"kind": "books#volumes", "totalItems": 0}"#.to_owned()),
        SparseJsonProducer => Ok(include_str!("../../tests/data/google_book_sparse_json.txt").to_owned()),
        UntitledProducer => Ok(r#"{"items": [{"volumeInfo": {"authors": ["Anon"]}}]}"#.to_owned()),
        InvalidJsonProducer => Ok("<html>not json</html>".to_owned()),
    }

    #[test]
    fn first_volume_is_normalized() {
        let book = search_first(&MockJsonClient::<ValidJsonProducer>::default(), "code complete")
            .expect("ValidJsonProducer always produces a valid json String to be deserialized");

        assert_eq!("Code Complete", book.title);
        assert_eq!("Steve McConnell", book.authors);
        assert_eq!("2004", book.published_date);
        assert_eq!("Computers, Software Development", book.categories);
        assert_eq!(
            Some("http://books.google.com/books/content?id=LpVCAwAAQBAJ&printsec=frontcover&img=1&zoom=1"),
            book.image.as_deref()
        );
    }

    #[test]
    fn missing_fields_use_fallbacks() {
        let book = search_first(&MockJsonClient::<SparseJsonProducer>::default(), "sparse")
            .unwrap();

        assert_eq!("A Sparse Volume", book.title);
        assert_eq!(UNKNOWN_AUTHORS, book.authors);
        assert_eq!(UNKNOWN_DATE, book.published_date);
        assert_eq!(UNKNOWN_CATEGORIES, book.categories);
        assert_eq!(None, book.image);
    }

    #[test]
    fn no_items_is_no_results() {
        let err = search_first(&MockJsonClient::<NoItemsProducer>::default(), "zzzz").unwrap_err();

        assert_eq!(ErrorKind::NoResults, err.kind());
    }

    #[test]
    fn untitled_volume_is_no_results() {
        let err = search_first(&MockJsonClient::<UntitledProducer>::default(), "anon").unwrap_err();

        assert_eq!(ErrorKind::NoResults, err.kind());
    }

    #[test]
    fn invalid_json_is_deserialize_error() {
        let err =
            search_first(&MockJsonClient::<InvalidJsonProducer>::default(), "x").unwrap_err();

        assert_eq!(ErrorKind::Deserialize, err.kind());
    }

    #[test]
    fn network_errors_are_passed_on() {
        let err =
            search_first(&MockJsonClient::<NetworkErrorProducer>::default(), "x").unwrap_err();

        assert_eq!(ErrorKind::IO, err.kind());
    }

    #[test]
    fn query_is_url_encoded() {
        let url = search_url("the lord & the rings").unwrap();

        assert_eq!(
            "https://www.googleapis.com/books/v1/volumes?q=the+lord+%26+the+rings",
            url
        );
    }
}
