//! Resolution of a user supplied source into a local file.
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use url::Url;

#[derive(Debug)]
pub enum Error {
    Url(url::ParseError),
    Http(reqwest::Error),
    Io(std::io::Error),
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Url(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Url(e) => write!(f, "URL error: {}", e),
            Error::Http(e) => write!(f, "HTTP error: {}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Url(e) => Some(e),
            Error::Http(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

/// Whether `source` should be fetched rather than read from disk.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// A document ready to be parsed from the local filesystem.
#[derive(Debug)]
pub enum Source {
    /// A path given by the user. Never removed.
    Local(PathBuf),

    /// A transient copy of a remote document, removed when dropped.
    Fetched(NamedTempFile),
}

impl Source {
    pub fn path(&self) -> &Path {
        match self {
            Source::Local(path) => path,
            Source::Fetched(file) => file.path(),
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, Source::Fetched(_))
    }

    /// Release the source, deleting the transient file if there is one.
    pub fn close(self) -> std::io::Result<()> {
        match self {
            Source::Local(_) => Ok(()),
            Source::Fetched(file) => {
                log::debug!("Removing {}", file.path().display());
                file.close()
            }
        }
    }
}

/// Turns sources into local files, downloading URLs as needed.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    timeout: Option<Duration>,
    temp_dir: Option<PathBuf>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up on requests that take longer than `timeout`.
    ///
    /// Without this, a fetch waits for as long as the server keeps the
    /// connection open.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Store downloaded documents in `dir` instead of the system temporary directory.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    pub fn resolve(&self, source: &str) -> Result<Source, Error> {
        if is_url(source) {
            let url: Url = source.parse()?;
            self.fetch(url).map(Source::Fetched)
        } else {
            Ok(Source::Local(PathBuf::from(source)))
        }
    }

    fn fetch(&self, url: Url) -> Result<NamedTempFile, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        log::info!("Fetching {}", url);
        let response = client.get(url).send()?.error_for_status()?;
        log::debug!("Response status: {}", response.status());
        let body = response.bytes()?;

        let mut builder = tempfile::Builder::new();
        builder.prefix("wadl-").suffix(".wadl");
        let mut file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(&body)?;
        file.flush()?;
        log::debug!("Wrote {} bytes to {}", body.len(), file.path().display());

        Ok(file)
    }
}

/// Resolve `source` with the default settings.
pub fn resolve(source: &str) -> Result<Source, Error> {
    Resolver::new().resolve(source)
}
