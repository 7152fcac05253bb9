use reqwest::redirect::Policy;
use url::Url;

use std::time::Instant;

use crate::config::Config;
use crate::constants::{http_client, http_status};
use crate::error::Result;
use crate::summary::Link;

/// A fetched page: the status label of the response and the raw HTML body.
#[derive(Debug)]
pub struct PageResponse {
    pub status: String,
    pub body: String,
}

/// Issues the outbound HTTP requests: the initial page fetch and one GET
/// probe per resolved link, all through a single pooled client.
#[derive(Debug)]
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    pub fn new(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(http_client::MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the page under check. Transport failures are fatal for the whole
    /// run, so they propagate as errors.
    pub async fn fetch_page(&self, page_url: &Url) -> Result<PageResponse> {
        let response = self.client.get(page_url.clone()).send().await?;
        let status = response.status().as_u16().to_string();
        let body = response.text().await?;

        Ok(PageResponse { status, body })
    }

    /// Probe one link with a single GET, measuring wall-clock latency from
    /// request start to response-or-failure. Failures never propagate: a
    /// probe that gets no response yields a [`Link`] with the `"n/a"` status
    /// label and the failure description.
    pub async fn probe(&self, url: &Url) -> Link {
        let start = Instant::now();
        let response = self.client.get(url.clone()).send().await;
        let latency = start.elapsed();

        match response {
            Ok(res) => {
                let response_code = res.status().as_u16().to_string();
                // Body content is irrelevant; drop releases the connection
                drop(res);
                Link::new(url.to_string(), latency, response_code, String::new())
            }
            Err(err) => {
                let description = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                Link::new(
                    url.to_string(),
                    latency,
                    http_status::UNAVAILABLE.to_string(),
                    description,
                )
            }
        }
    }
}
