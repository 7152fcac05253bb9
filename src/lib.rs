//! linkscan: fetch a web page, probe every link on it, and summarize the
//! results.
//!
//! The pipeline: the page is fetched once, its href attributes are extracted
//! in document order, each href is resolved against the page URL, and every
//! resolvable target is probed concurrently with a single GET. Probe results
//! are folded into a [`Summary`] (running average latency, per-status-code
//! histogram, per-link detail) which is emitted as one JSON object.

pub mod checker;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod logging;
pub mod output;
pub mod probe;
pub mod resolver;
pub mod summary;

pub use checker::{CheckPage, Checker};
pub use error::{LinkScanError, Result};
pub use resolver::{ResolveError, resolve};
pub use summary::{Link, Summary};
