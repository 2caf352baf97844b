use std::fmt::{self, Display};
use std::io::Error as IOError;

#[derive(Debug)]
pub(crate) enum Error {
    Terminal(IOError),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

impl From<IOError> for Error {
    fn from(value: IOError) -> Self {
        Error::Terminal(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Terminal(e) => write!(f, "terminal error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Terminal(e) => Some(e),
        }
    }
}
