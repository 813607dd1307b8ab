use anyhow::Context;
use chrono::TimeZone;
use clap::{Parser, Subcommand};
use inquire::CustomType;
use std::fmt::Display;
use sunset_core::{Config, Location, SolarTimes};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "sunset", version, about = "Sunrise, sunset and twilight times from sunrise-sunset.org")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a default location.
    Configure,

    /// Show today's solar events for a location.
    Show {
        /// Latitude in decimal degrees; the configured default is used if absent.
        #[arg(allow_negative_numbers = true, requires = "longitude")]
        latitude: Option<f64>,

        /// Longitude in decimal degrees.
        #[arg(allow_negative_numbers = true)]
        longitude: Option<f64>,

        /// Print times in UTC instead of local time.
        #[arg(long)]
        utc: bool,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show {
                latitude,
                longitude,
                utc,
                json,
            } => show(latitude, longitude, utc, json).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;
    let current = config.default_location;

    let latitude = prompt_degrees("Latitude:", current.map(|l| l.latitude))
        .context("Failed to read latitude")?;
    let longitude = prompt_degrees("Longitude:", current.map(|l| l.longitude))
        .context("Failed to read longitude")?;

    config.set_default_location(Location::new(latitude, longitude));
    config.save()?;

    println!(
        "Default location set to {latitude}, {longitude} ({})",
        Config::config_file_path()?.display()
    );
    Ok(())
}

fn prompt_degrees(message: &str, default: Option<f64>) -> anyhow::Result<f64> {
    let mut prompt = CustomType::<f64>::new(message)
        .with_help_message("Signed decimal degrees, north and east positive")
        .with_error_message("Please enter a number, e.g. 52.52 or -13.405");

    if let Some(value) = default {
        prompt = prompt.with_default(value);
    }

    Ok(prompt.prompt()?)
}

async fn show(latitude: Option<f64>, longitude: Option<f64>, utc: bool, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;

    let location = match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Location::new(latitude, longitude),
        _ => config.default_location()?,
    };
    debug!(?location, "looking up solar times");

    let times = config
        .client()
        .fetch_location(&location)
        .await
        .context("Failed to fetch solar times from sunrise-sunset.org")?;

    if utc {
        render(&times, json)
    } else {
        render(&times.to_local(), json)
    }
}

fn render<Tz: TimeZone>(times: &SolarTimes<Tz>, json: bool) -> anyhow::Result<()>
where
    Tz::Offset: Display,
{
    if json {
        println!("{}", serde_json::to_string_pretty(times)?);
        return Ok(());
    }

    for (event, at) in times.events() {
        println!("{:<28} {}", event.label(), at.format("%Y-%m-%d %H:%M:%S %:z"));
    }
    println!("{:<28} {}", "Day length", format_day_length(times.day_length));

    Ok(())
}

fn format_day_length(seconds: u32) -> String {
    format!("{}h {:02}m {:02}s", seconds / 3600, seconds % 3600 / 60, seconds % 60)
}
