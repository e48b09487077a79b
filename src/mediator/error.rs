use std::fmt;

/// Error type for the mediator.
#[derive(PartialEq, Eq)]
pub struct Error {
    repr: ErrorRepr,
}

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No handler is registered for the request.
    NotFound,
    /// An unknown error.
    Unknown,
}

impl ErrorKind {
    /// Returns the description of the error kind.
    pub fn as_str(&self) -> &str {
        match *self {
            ErrorKind::NotFound => "handler not found",
            ErrorKind::Unknown => "unknown error",
        }
    }
}

#[derive(PartialEq, Eq)]
enum ErrorRepr {
    Kind(ErrorKind),
    WithDescription(ErrorKind, String),
}

impl Error {
    pub fn new<S: Into<String>>(kind: ErrorKind, description: S) -> Error {
        Error {
            repr: ErrorRepr::WithDescription(kind, description.into()),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::Kind(kind) => kind,
            ErrorRepr::WithDescription(kind, _) => kind,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            repr: ErrorRepr::Kind(kind),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.repr {
            ErrorRepr::Kind(ref kind) => write!(f, "{}", kind.as_str()),
            ErrorRepr::WithDescription(ErrorKind::Unknown, ref description) => {
                write!(f, "{}", description)
            }
            ErrorRepr::WithDescription(ref kind, ref description) => {
                write!(f, "{}: {}", kind.as_str(), description)
            }
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for Error {}
