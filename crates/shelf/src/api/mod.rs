use serde::de::DeserializeOwned;

pub(crate) mod google_books;

/// An HTTP client able to fetch and decode JSON documents.
pub trait Client
where
    Self: Default,
{
    /// Sends a GET request to `url` and decodes the response body as JSON.
    ///
    /// # Errors
    /// If the request fails or the body cannot be decoded into `T`.
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::wrap(ErrorKind::IO, e))
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }
}

#[cfg(test)]
pub(crate) use test::{impl_json_producer, MockJsonClient, NetworkErrorProducer, Producer};

use crate::{Error, ErrorKind};
