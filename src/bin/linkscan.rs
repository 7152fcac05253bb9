use clap::{CommandFactory, Parser};
use url::Url;

use linkscan::checker::{CheckPage, Checker};
use linkscan::cli::{Cli, cli_to_config, validate_args};
use linkscan::config::{CliConfig, Config};
use linkscan::error::LinkScanError;
use linkscan::{logging, output};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_linkscan_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main page-check logic extracted from main() for testing
pub async fn run_linkscan_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let page_url_arg = match validate_args(&cli.url) {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Error: {e}\n");
            eprintln!("{}", Cli::command().render_usage());
            return Ok(1);
        }
    };

    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let verbose = cli_config.verbose || config.verbose.unwrap_or(false);
    logging::init_logger(verbose, cli_config.quiet);

    let page_url = Url::parse(page_url_arg).map_err(LinkScanError::InvalidUrl)?;

    let checker = Checker::default();
    let summary = checker.check_page(&page_url, &config).await?;

    output::print_summary(&summary)?;
    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI
/// arguments (CLI takes precedence)
pub fn load_and_merge_config(
    cli_config: &CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    Ok(config)
}
