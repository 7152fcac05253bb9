use crate::config::Config;
use log::{debug, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, actual_concurrency: usize) {
    let timeout = config.timeout.unwrap_or(30);
    info!("Configuration: concurrency={actual_concurrency}, timeout={timeout}s");
}

/// Log page fetch information
pub fn log_page_fetched(url: &str, status: &str, href_count: usize) {
    info!("Fetched {url} ({status}), found {href_count} href(s)");
}

/// Log an href that was dropped during resolution
pub fn log_href_skipped(href: &str, reason: &dyn std::error::Error) {
    debug!("Skipping href '{href}': {reason}");
}

/// Log individual probe results for debugging
pub fn log_probe_result(url: &str, response_code: &str, error: &str) {
    if error.is_empty() {
        debug!("✓ {url} -> {response_code}");
    } else {
        debug!("✗ {url} -> {response_code} ({error})");
    }
}

/// Log check completion
pub fn log_check_complete(total_links: u64, failures: u64, duration_ms: u128) {
    if failures == 0 {
        info!("✅ Check complete: {total_links} link(s) probed ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Check complete: {}/{} link(s) got a response, {} failed ({}ms)",
            total_links - failures,
            total_links,
            failures,
            duration_ms
        );
    }
}
