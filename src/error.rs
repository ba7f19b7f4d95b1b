pub type Result<T> = core::result::Result<T, Error>;

pub struct Error {
    pub inner: Box<ErrorKind>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::new(ErrorKind::NetworkError(e.to_string()))
    }
}

#[cfg(feature = "wasm")]
impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::NetworkError(e.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::new(ErrorKind::StorageError(e.to_string()))
    }
}

pub enum ErrorKind {
    /// The request never reached the server.
    NetworkError(String),
    /// The server answered a login attempt with a non-success status.
    AuthRejected(String),
    /// The profile endpoint refused the token (or returned garbage).
    TokenInvalid(String),
    /// A login was attempted while another attempt was still in flight.
    OperationInProgress,
    /// A selection toggle referenced a non-existent item. Contract
    /// violation; callers must not swallow this one.
    IndexOutOfRange(usize, usize),
    ParseError(String),
    StorageError(String),
    SerdeJsonError(serde_json::Error),
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ErrorKind::NetworkError(ref e) => write!(f, "NetworkError: {e:?}"),
            ErrorKind::AuthRejected(ref e) => write!(f, "AuthRejected: {e:?}"),
            ErrorKind::TokenInvalid(ref e) => write!(f, "TokenInvalid: {e:?}"),
            ErrorKind::OperationInProgress => write!(f, "OperationInProgress"),
            ErrorKind::IndexOutOfRange(index, len) => {
                write!(f, "IndexOutOfRange: index {index} out of {len} items")
            }
            ErrorKind::ParseError(ref e) => write!(f, "ParseError: {e:?}"),
            ErrorKind::StorageError(ref e) => write!(f, "StorageError: {e:?}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ErrorKind::NetworkError(ref e) => write!(f, "NetworkError: {e}"),
            ErrorKind::AuthRejected(ref e) => write!(f, "AuthRejected: {e}"),
            ErrorKind::TokenInvalid(ref e) => write!(f, "TokenInvalid: {e}"),
            ErrorKind::OperationInProgress => write!(f, "OperationInProgress"),
            ErrorKind::IndexOutOfRange(index, len) => {
                write!(f, "IndexOutOfRange: index {index} out of {len} items")
            }
            ErrorKind::ParseError(ref e) => write!(f, "ParseError: {e}"),
            ErrorKind::StorageError(ref e) => write!(f, "StorageError: {e}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e}"),
        }
    }
}
