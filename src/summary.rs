use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};

use std::time::Duration;

/// One probed link target.
///
/// Immutable once constructed; ownership moves into the `Summary` when the
/// probe result is folded in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Absolute, resolved URL that was probed
    pub url: String,
    /// Wall-clock duration of the probe, serialized as fractional milliseconds
    #[serde(serialize_with = "serialize_millis")]
    pub latency: Duration,
    /// Status code label, or `"n/a"` when no response was obtained
    pub response_code: String,
    /// Failure description, empty when the probe got a response
    pub error: String,
}

impl Link {
    pub fn new(url: String, latency: Duration, response_code: String, error: String) -> Self {
        Self {
            url,
            latency,
            response_code,
            error,
        }
    }

    /// Latency in fractional milliseconds, the unit all aggregate math uses.
    pub fn latency_ms(&self) -> f64 {
        self.latency.as_secs_f64() * 1000.0
    }
}

fn serialize_millis<S: Serializer>(latency: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(latency.as_secs_f64() * 1000.0)
}

/// Aggregate state for one page-check run.
///
/// Mutated exclusively through [`Summary::add_link`], which applies the list
/// append, the total increment, the running-mean update, and the histogram
/// increment as one unit. Callers that fold results from concurrent probes
/// must serialize their `add_link` calls (a single consumer loop or a mutex);
/// reads are only valid once all writers have finished.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The page URL being checked
    pub url: String,
    /// Running mean of all recorded link latencies, in milliseconds
    pub avg_latency: f64,
    /// Status code label of the initial page fetch
    pub response_code: String,
    /// Number of links folded in
    pub total_links: u64,
    /// Occurrence count per status code label
    pub responses_per_code: FxHashMap<String, u64>,
    /// All link records, in arrival order
    pub links: Vec<Link>,
}

impl Summary {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            avg_latency: 0.0,
            response_code: String::new(),
            total_links: 0,
            responses_per_code: FxHashMap::default(),
            links: Vec::new(),
        }
    }

    /// Fold one probe result into the aggregate.
    ///
    /// The mean is maintained incrementally:
    /// `avg += (latency - avg) / total_new`. The final value is invariant to
    /// the order results arrive in, so concurrent completion order does not
    /// change the reported average.
    pub fn add_link(&mut self, link: Link) {
        self.total_links += 1;
        self.avg_latency += (link.latency_ms() - self.avg_latency) / self.total_links as f64;
        *self
            .responses_per_code
            .entry(link.response_code.clone())
            .or_insert(0) += 1;
        self.links.push(link);
    }
}
