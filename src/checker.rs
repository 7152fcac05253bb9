use async_trait::async_trait;
use futures::{StreamExt, stream};
use url::Url;

use std::time::Instant;

use crate::config::Config;
use crate::constants::http_status;
use crate::error::Result;
use crate::extract::extract_hrefs;
use crate::logging;
use crate::probe::Prober;
use crate::resolver::resolve;
use crate::summary::Summary;

#[async_trait]
pub trait CheckPage {
    async fn check_page(&self, page_url: &Url, config: &Config) -> Result<Summary>;
}

#[derive(Default, Debug)]
pub struct Checker {}

#[async_trait]
impl CheckPage for Checker {
    /// Drive one end-to-end page check: fetch the page, extract its hrefs,
    /// probe every resolvable target concurrently, and fold each completed
    /// probe into the summary.
    async fn check_page(&self, page_url: &Url, config: &Config) -> Result<Summary> {
        let started = Instant::now();
        let concurrency = config.effective_concurrency();
        logging::log_config_info(config, concurrency);

        let prober = Prober::new(config)?;
        let page = prober.fetch_page(page_url).await?;

        let hrefs = extract_hrefs(&page.body);
        logging::log_page_fetched(page_url.as_str(), &page.status, hrefs.len());

        let mut summary = Summary::new(page_url.to_string());
        summary.response_code = page.status;

        // Hrefs that fail resolution are dropped: no probe, no aggregation
        let targets: Vec<Url> = hrefs
            .iter()
            .filter_map(|href| match resolve(page_url, href) {
                Ok(url) => Some(url),
                Err(err) => {
                    logging::log_href_skipped(href, &err);
                    None
                }
            })
            .collect();

        let mut probes = stream::iter(targets)
            .map(|url| {
                let prober = &prober;
                async move { prober.probe(&url).await }
            })
            .buffer_unordered(concurrency);

        // Single consumer loop: add_link calls arrive serialized, and
        // exhausting the stream is the completion barrier for every probe
        while let Some(link) = probes.next().await {
            logging::log_probe_result(&link.url, &link.response_code, &link.error);
            summary.add_link(link);
        }

        let failures = summary
            .responses_per_code
            .get(http_status::UNAVAILABLE)
            .copied()
            .unwrap_or(0);
        logging::log_check_complete(
            summary.total_links,
            failures,
            started.elapsed().as_millis(),
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use mockito::{Server, ServerGuard};

    fn test_config() -> Config {
        Config {
            timeout: Some(5), // 5 seconds for CI stability
            concurrency: Some(4),
            ..Default::default()
        }
    }

    async fn check(server_body: &str) -> (Summary, ServerGuard) {
        let mut server = Server::new_async().await;
        let _page = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body(server_body.to_string())
            .create();
        let page_url = Url::parse(&(server.url() + "/page")).unwrap();

        let summary = Checker::default()
            .check_page(&page_url, &test_config())
            .await
            .unwrap();
        (summary, server)
    }

    #[tokio::test]
    async fn test_check_page__aggregates_mixed_probe_outcomes() {
        let mut server = Server::new_async().await;
        let _ok = server.mock("GET", "/ok").with_status(200).create();
        let _missing = server.mock("GET", "/missing").with_status(404).create();
        let body = r#"
            <a href="/ok">ok</a>
            <a href="/missing">missing</a>
            <a href="http://192.0.2.1:1/down">down</a>
        "#;
        let _page = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body(body)
            .create();
        let page_url = Url::parse(&(server.url() + "/page")).unwrap();

        let config = Config {
            timeout: Some(1), // keep the unreachable probe short
            concurrency: Some(4),
            ..Default::default()
        };
        let summary = Checker::default()
            .check_page(&page_url, &config)
            .await
            .unwrap();

        assert_eq!(summary.url, page_url.to_string());
        assert_eq!(summary.response_code, "200");
        assert_eq!(summary.total_links, 3);
        assert_eq!(summary.links.len(), 3);
        assert_eq!(summary.responses_per_code["200"], 1);
        assert_eq!(summary.responses_per_code["404"], 1);
        assert_eq!(summary.responses_per_code["n/a"], 1);

        let failed = summary
            .links
            .iter()
            .find(|link| link.response_code == "n/a")
            .unwrap();
        assert!(!failed.error.is_empty());
    }

    #[tokio::test]
    async fn test_check_page__when_no_hrefs__summary_is_empty() {
        let (summary, _server) = check("<html><body><p>no links here</p></body></html>").await;

        assert_eq!(summary.total_links, 0);
        assert_eq!(summary.avg_latency, 0.0);
        assert!(summary.responses_per_code.is_empty());
        assert!(summary.links.is_empty());
    }

    #[tokio::test]
    async fn test_check_page__silently_drops_unresolvable_hrefs() {
        let mut server = Server::new_async().await;
        let _ok = server.mock("GET", "/ok").with_status(200).create();
        let body = r#"
            <a href="mailto:jdoe@example.com">mail</a>
            <a href="ftp://example.com/file">ftp</a>
            <a href="http://[invalid">broken</a>
            <a href="/ok">ok</a>
        "#;
        let _page = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body(body)
            .create();
        let page_url = Url::parse(&(server.url() + "/page")).unwrap();

        let summary = Checker::default()
            .check_page(&page_url, &test_config())
            .await
            .unwrap();

        // Only the resolvable href was probed; the rest left no trace
        assert_eq!(summary.total_links, 1);
        assert_eq!(summary.links[0].response_code, "200");
        assert!(summary.responses_per_code.keys().all(|code| code == "200"));
    }

    #[tokio::test]
    async fn test_check_page__counts_every_href_exactly_once() {
        let mut server = Server::new_async().await;
        let _ok = server.mock("GET", "/ok").with_status(200).create();
        // Duplicate hrefs are probed independently, no deduplication
        let body = (0..10)
            .map(|_| r#"<a href="/ok">x</a>"#)
            .collect::<String>();
        let _page = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body(body)
            .create();
        let page_url = Url::parse(&(server.url() + "/page")).unwrap();

        let summary = Checker::default()
            .check_page(&page_url, &test_config())
            .await
            .unwrap();

        assert_eq!(summary.total_links, 10);
        assert_eq!(summary.responses_per_code["200"], 10);
        let histogram_total: u64 = summary.responses_per_code.values().sum();
        assert_eq!(histogram_total, summary.total_links);
    }

    #[tokio::test]
    async fn test_check_page__relative_hrefs_resolve_against_the_page() {
        let mut server = Server::new_async().await;
        let about = server.mock("GET", "/about").with_status(200).create();
        let _page = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body(r#"<a href="about">about</a>"#)
            .create();
        let page_url = Url::parse(&(server.url() + "/page")).unwrap();

        let summary = Checker::default()
            .check_page(&page_url, &test_config())
            .await
            .unwrap();

        about.assert();
        assert_eq!(summary.total_links, 1);
        assert!(summary.links[0].url.ends_with("/about"));
    }

    #[tokio::test]
    async fn test_check_page__records_non_success_page_status() {
        let mut server = Server::new_async().await;
        let _page = server
            .mock("GET", "/page")
            .with_status(500)
            .with_body("<html></html>")
            .create();
        let page_url = Url::parse(&(server.url() + "/page")).unwrap();

        let summary = Checker::default()
            .check_page(&page_url, &test_config())
            .await
            .unwrap();

        // A non-2xx page response is not fatal; its status is recorded
        assert_eq!(summary.response_code, "500");
        assert_eq!(summary.total_links, 0);
    }

    #[tokio::test]
    async fn test_check_page__when_page_unreachable__is_fatal() {
        let config = Config {
            timeout: Some(1),
            ..Default::default()
        };
        let page_url = Url::parse("http://192.0.2.1:1/page").unwrap();

        let result = Checker::default().check_page(&page_url, &config).await;

        assert!(result.is_err());
    }
}
