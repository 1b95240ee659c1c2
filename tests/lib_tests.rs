use std::error::Error as StdError;
use wadl_dump::{Error, FetchError, ParseError};

#[test]
fn test_parse_error_display() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = ParseError::Io(io_error).into();
    let display_str = format!("{}", error);
    assert!(display_str.starts_with("Error parsing WADL file: "));
    assert!(display_str.contains("file not found"));
}

#[test]
fn test_fetch_error_display() {
    let error: Error = FetchError::Url(url::ParseError::EmptyHost).into();
    let display_str = format!("{}", error);
    assert!(display_str.starts_with("Error fetching WADL file from URL: "));
    assert!(display_str.contains("URL error"));
}

#[test]
fn test_error_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = Error::Parse(ParseError::Io(io_error));
    let source = StdError::source(&error).unwrap();
    assert!(source.source().is_some());
}

#[test]
fn test_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "io error");
    let error: ParseError = io_error.into();
    assert!(matches!(error, ParseError::Io(_)));

    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "io error");
    let error: FetchError = io_error.into();
    assert!(matches!(error, FetchError::Io(_)));
}

#[test]
fn test_error_from_url() {
    let error: FetchError = url::ParseError::EmptyHost.into();
    assert!(matches!(error, FetchError::Url(_)));
}

#[test]
fn test_error_debug() {
    let error = Error::Fetch(FetchError::Url(url::ParseError::EmptyHost));
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("EmptyHost"));
}

#[test]
fn test_root_elements_error() {
    let error: Error = ParseError::RootElements(2).into();
    assert!(format!("{}", error).contains("expected one root element, found 2"));
    assert!(StdError::source(&error).unwrap().source().is_none());
}
