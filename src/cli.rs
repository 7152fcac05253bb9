// Command-line interface definitions and parsing for linkscan

use clap::Parser;

use crate::config::CliConfig;
use crate::error::{LinkScanError, Result};

#[derive(Parser)]
#[command(author, version, about = "Check every link on a web page", long_about = None)]
pub struct Cli {
    /// Page URL to check
    #[arg(value_name = "URL")]
    pub url: Vec<String>,

    // Core Options
    /// Connection timeout in seconds (default: 30)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// Concurrent link probes (default: CPU cores)
    #[arg(long, value_name = "COUNT", help_heading = "Core Options")]
    pub concurrency: Option<usize>,

    // Network
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Output & Verbosity
    /// Suppress diagnostic output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Check that exactly one page URL was supplied and return it.
///
/// The positional argument is captured as a list so this validation owns the
/// diagnostic text instead of clap's generic arity errors.
pub fn validate_args(urls: &[String]) -> Result<&str> {
    match urls {
        [] => Err(LinkScanError::InvalidArgument("Missing URL".to_string())),
        [url] => Ok(url.as_str()),
        extra => Err(LinkScanError::InvalidArgument(format!(
            "Got {} Arguments, expected 1",
            extra.len()
        ))),
    }
}

/// Parse command line arguments into CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        concurrency: cli.concurrency,
        user_agent: cli.user_agent.clone(),
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
