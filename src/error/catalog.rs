use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure or non-success HTTP status.
    Network,
    /// A payload that does not have the expected shape.
    Decode,
    /// Reading or writing the saved user record.
    Storage,
    NotFound,
    NotLoggedIn,
    NotEnrolled,
}

#[derive(Debug)]
pub struct CatalogError {
    pub kind: ErrorKind,
    pub message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn new(kind: ErrorKind, message: &str) -> Self {
        CatalogError {
            kind,
            message: message.to_string(),
            source: None,
        }
    }

    pub fn not_found(what: &str, id: u32) -> Self {
        CatalogError::new(ErrorKind::NotFound, &format!("{} {} not found", what, id))
    }

    fn wrap<E: StdError + Send + Sync + 'static>(kind: ErrorKind, err: E) -> Self {
        CatalogError {
            kind,
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogError({:?}): {}", self.kind, self.message)
    }
}

impl StdError for CatalogError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_decode() {
            ErrorKind::Decode
        } else {
            ErrorKind::Network
        };
        CatalogError::wrap(kind, err)
    }
}

impl From<reqwest_middleware::Error> for CatalogError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(err) => err.into(),
            reqwest_middleware::Error::Middleware(err) => {
                CatalogError::new(ErrorKind::Network, &format!("{:#}", err))
            }
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::wrap(ErrorKind::Decode, err)
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::wrap(ErrorKind::Storage, err)
    }
}
