//! Output formatting for linkscan
//!
//! A successful run produces exactly one JSON object on stdout and nothing
//! else; diagnostics go to stderr via the logger.

use crate::error::Result;
use crate::summary::Summary;

/// Render the summary as a compact JSON document.
pub fn to_json(summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string(summary)?)
}

/// Print the summary JSON to stdout.
pub fn print_summary(summary: &Summary) -> Result<()> {
    println!("{}", to_json(summary)?);
    Ok(())
}
