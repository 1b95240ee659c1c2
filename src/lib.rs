pub mod endpoint;
pub mod fetch;
mod parse;
pub mod present;

pub use endpoint::Endpoint;
pub use fetch::{resolve, Error as FetchError, Resolver, Source};
pub use parse::{
    endpoints, extract, extract_bytes, extract_file, extract_or_report, extract_string,
    Error as ParseError, WADL_NS,
};
pub use present::render;

#[derive(Debug)]
pub enum Error {
    Fetch(FetchError),
    Parse(ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Fetch(err) => write!(f, "Error fetching WADL file from URL: {}", err),
            Error::Parse(err) => write!(f, "Error parsing WADL file: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Fetch(err) => Some(err),
            Error::Parse(err) => Some(err),
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}
