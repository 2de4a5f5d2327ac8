//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Terminal rendering of the lookup widget

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(cmd.verbose)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cmd.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verbosity_maps_to_filter() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(9), "trace");
    }

    #[test]
    fn cli_definition_is_valid() {
        cli::Cli::command().debug_assert();
    }

    #[test]
    fn show_parses_city_and_json_flag() {
        let parsed = cli::Cli::try_parse_from(["weather", "-v", "show", "Paris", "--json"]).unwrap();

        assert_eq!(parsed.verbose, 1);
        match parsed.command {
            Some(cli::Command::Show { city, json }) => {
                assert_eq!(city, "Paris");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let parsed = cli::Cli::try_parse_from(["weather"]).unwrap();
        assert!(parsed.command.is_none());
    }
}
