use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use tracing::info;
use weather_core::{Config, RequestState, WeatherSession, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather lookup by city")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show the current weather for a city and exit.
    Show {
        /// City or country name.
        city: String,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for cities until cancelled (the default).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city, json }) => show(city, json).await,
            Some(Command::Interactive) | None => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    cfg.set_api_key(api_key.trim().to_string());
    cfg.save()?;

    let path = Config::config_file_path()?;
    info!(path = %path.display(), "configuration saved");
    println!("Saved configuration to {}", path.display());

    Ok(())
}

fn open_session() -> anyhow::Result<WeatherSession> {
    let cfg = Config::resolve()?;
    let provider = provider_from_config(&cfg)?;
    Ok(WeatherSession::new(provider))
}

async fn show(city: String, json: bool) -> anyhow::Result<()> {
    let mut session = open_session()?;
    session.set_query(city);

    if let Some(handle) = session.submit() {
        handle.await.context("Weather lookup task failed")?;
    }

    match session.state() {
        RequestState::Error(info) => anyhow::bail!("{info}"),
        RequestState::Success(report) if json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => println!("{}", session.view()),
    }

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let mut session = open_session()?;
    println!("{}", session.view());

    loop {
        let text = match Text::new("Search by city or country").prompt() {
            Ok(text) => text,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read search input"),
        };

        session.set_query(text);
        let Some(handle) = session.submit() else {
            // Empty input: nothing submitted, keep showing what we had.
            println!("{}", session.view());
            continue;
        };

        println!("{}", session.view());
        handle.await.context("Weather lookup task failed")?;
        println!("{}\n", session.view());
    }

    Ok(())
}
