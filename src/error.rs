use std::fmt;

/// Comprehensive error types for linkscan operations
#[derive(Debug)]
pub enum LinkScanError {
    /// IO error (stdout, config files, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client error (page fetch failures are fatal)
    Http(reqwest::Error),

    /// The page URL could not be parsed
    InvalidUrl(url::ParseError),

    /// JSON serialization error
    Json(serde_json::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for LinkScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkScanError::Io(err) => write!(f, "IO error: {err}"),
            LinkScanError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LinkScanError::Http(err) => write!(f, "HTTP error: {err}"),
            LinkScanError::InvalidUrl(err) => write!(f, "Invalid URL: {err}"),
            LinkScanError::Json(err) => write!(f, "JSON error: {err}"),
            LinkScanError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            LinkScanError::InvalidArgument(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for LinkScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkScanError::Io(err) => Some(err),
            LinkScanError::Http(err) => Some(err),
            LinkScanError::InvalidUrl(err) => Some(err),
            LinkScanError::Json(err) => Some(err),
            LinkScanError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LinkScanError {
    fn from(err: std::io::Error) -> Self {
        LinkScanError::Io(err)
    }
}

impl From<reqwest::Error> for LinkScanError {
    fn from(err: reqwest::Error) -> Self {
        LinkScanError::Http(err)
    }
}

impl From<url::ParseError> for LinkScanError {
    fn from(err: url::ParseError) -> Self {
        LinkScanError::InvalidUrl(err)
    }
}

impl From<serde_json::Error> for LinkScanError {
    fn from(err: serde_json::Error) -> Self {
        LinkScanError::Json(err)
    }
}

impl From<toml::de::Error> for LinkScanError {
    fn from(err: toml::de::Error) -> Self {
        LinkScanError::TomlParsing(err)
    }
}

/// Type alias for Results using LinkScanError
pub type Result<T> = std::result::Result<T, LinkScanError>;
