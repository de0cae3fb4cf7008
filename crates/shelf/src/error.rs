pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

const EMPTY_QUERY_MESSAGE: &str = "El campo de búsqueda no puede estar vacío";
const NO_RESULTS_MESSAGE: &str = "No se encontraron resultados";

/// The Errors that may occur when calling the shelf functions.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The search text was blank.
    EmptyQuery,
    /// The search provider returned no candidates for the query.
    NoResults,
    /// The error is associated with an underlying IO or network error.
    IO,
    /// An error caused when parsing/deserialization fails.
    Deserialize,
    /// An error caused when a value cannot be serialized.
    Serialize,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Wraps an existing error as the source of [`Error`] with a message describing what was
    /// being attempted.
    pub fn wrap_with<E, S>(kind: ErrorKind, source: E, message: S) -> Self
    where
        E: Into<DynError>,
        S: Into<String>,
    {
        Self {
            kind,
            message: Some(message.into()),
            source: Some(source.into()),
        }
    }

    /// The user submitted a blank search.
    #[must_use]
    pub fn empty_query() -> Self {
        Self::new(ErrorKind::EmptyQuery, EMPTY_QUERY_MESSAGE)
    }

    /// The search provider found nothing.
    #[must_use]
    pub fn no_results() -> Self {
        Self::new(ErrorKind::NoResults, NO_RESULTS_MESSAGE)
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // user facing kinds only ever show their localized message
        match self.kind {
            ErrorKind::EmptyQuery | ErrorKind::NoResults => {
                return f.write_str(self.message.as_deref().unwrap_or_default());
            }
            ErrorKind::IO => f.write_str("IO error")?,
            ErrorKind::Deserialize => f.write_str("Deserialize error")?,
            ErrorKind::Serialize => f.write_str("Serialize error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_errors_display_only_their_message() {
        assert_eq!(
            "El campo de búsqueda no puede estar vacío",
            Error::empty_query().to_string()
        );
        assert_eq!("No se encontraron resultados", Error::no_results().to_string());
    }

    #[test]
    fn wrapped_error_displays_kind_message_and_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = Error::wrap_with(ErrorKind::IO, io, "Cannot write books");

        assert_eq!(ErrorKind::IO, err.kind());
        assert_eq!(
            "IO error: Cannot write books: caused by disk full",
            err.to_string()
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn serialize_error_names_its_kind() {
        let err = Error::new(ErrorKind::Serialize, "Cannot serialize books");

        assert_eq!("Serialize error: Cannot serialize books", err.to_string());
    }
}
