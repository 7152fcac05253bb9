use url::{ParseError, Url};

use std::fmt;

/// Why an href could not be turned into a probeable URL.
#[derive(Debug)]
pub enum ResolveError {
    /// The href is not a valid URL, absolute or relative to the page
    Parse(ParseError),
    /// The href parsed, but its scheme cannot be probed over HTTP.
    /// Carries the parsed URL so the caller can decide whether to keep it.
    UnsupportedScheme { scheme: String, url: Url },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Parse(err) => write!(f, "could not parse href: {err}"),
            ResolveError::UnsupportedScheme { scheme, .. } => {
                write!(f, "unsupported scheme: {scheme}")
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::Parse(err) => Some(err),
            ResolveError::UnsupportedScheme { .. } => None,
        }
    }
}

/// Resolve a raw href found on a page into an absolute URL.
///
/// Hrefs with no scheme inherit the page's scheme, hrefs with no host inherit
/// the page's host, and relative paths are joined against the directory of
/// the page's path with `.`/`..` segments collapsed (standard RFC 3986
/// reference resolution), so `baz` against `http://example.com/foo/bar.html`
/// becomes `http://example.com/foo/baz` and `//foo.com` keeps the page's
/// scheme. Schemes other than `http`/`https` are rejected.
pub fn resolve(page_url: &Url, href: &str) -> Result<Url, ResolveError> {
    let resolved = match Url::parse(href) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => {
            page_url.join(href).map_err(ResolveError::Parse)?
        }
        Err(err) => return Err(ResolveError::Parse(err)),
    };

    if matches!(resolved.scheme(), "http" | "https") {
        Ok(resolved)
    } else {
        let scheme = resolved.scheme().to_string();
        Err(ResolveError::UnsupportedScheme {
            scheme,
            url: resolved,
        })
    }
}
