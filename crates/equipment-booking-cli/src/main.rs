//! `booking` CLI — check equipment availability and booking ranges from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Availability and first free day of a device (or a JSON array of devices)
//! booking --today 2020-07-09 status -i device.json
//!
//! # Same, marking the devices the current user already rents
//! booking status -i devices.json --rents rents.json
//!
//! # Longest valid range between two taps, as a JSON array
//! booking range --start 2020-07-23 --end 2020-07-11 -i device.json
//!
//! # Calendar markings for that range
//! booking marks --start 2020-07-11 --end 2020-07-15 < device.json
//!
//! # Markings for every reserved day
//! booking --config booking.toml locked -i device.json
//! ```

mod config;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use equipment_booking::{
    Clock, Device, DeviceStatus, EnglishLocalizer, FixedClock, RentedDevice, SystemClock,
};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::BookingConfig;

#[derive(Parser)]
#[command(
    name = "booking",
    version,
    about = "Equipment booking availability and range CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pin "today" to this day instead of reading the system clock
    #[arg(long, global = true, env = "BOOKING_TODAY", value_parser = parse_day_arg)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show availability, first free day and list description of devices
    Status {
        /// Device JSON, single object or array (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// JSON array of the current user's rents
        #[arg(long)]
        rents: Option<String>,
    },
    /// Print the valid selectable range between two days
    Range {
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long, value_parser = parse_day_arg)]
        start: NaiveDate,
        #[arg(long, value_parser = parse_day_arg)]
        end: NaiveDate,
        /// Do not cut the range at reservations
        #[arg(long)]
        ignore_bookings: bool,
    },
    /// Print calendar markings for the valid range between two days
    Marks {
        #[arg(short, long)]
        input: Option<String>,
        #[arg(long, value_parser = parse_day_arg)]
        start: NaiveDate,
        #[arg(long, value_parser = parse_day_arg)]
        end: NaiveDate,
        /// Paint the range as disabled instead of as a selection
        #[arg(long)]
        disabled: bool,
    },
    /// Print disabled markings for every reserved day
    Locked {
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// One device or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum DeviceInput {
    One(Device),
    Many(Vec<Device>),
}

#[derive(Serialize)]
struct StatusReport {
    id: u64,
    name: String,
    available: bool,
    first_availability: String,
    description: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = BookingConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load configuration from the environment".to_string(),
    })?;
    init_tracing(&config.logging.level);

    let clock: Box<dyn Clock> = match cli.today {
        Some(day) => {
            info!(%day, "clock pinned");
            Box::new(FixedClock::at_day(day))
        }
        None => Box::new(SystemClock),
    };
    let theme = config.theme_colors();

    match cli.command {
        Commands::Status { input, rents } => {
            let json = read_input(input.as_deref())?;
            let input: DeviceInput =
                serde_json::from_str(&json).context("Failed to parse device JSON")?;
            let rents = match rents {
                Some(path) => RentedDevice::list_from_json(&read_file(&path)?)
                    .context("Failed to parse rents JSON")?,
                None => Vec::new(),
            };

            let report = |device: &Device| status_report(device, &rents, clock.as_ref());
            let out = match input {
                DeviceInput::One(device) => serde_json::to_string_pretty(&report(&device))?,
                DeviceInput::Many(devices) => {
                    let reports: Vec<StatusReport> = devices.iter().map(report).collect();
                    serde_json::to_string_pretty(&reports)?
                }
            };
            println!("{}", out);
        }
        Commands::Range {
            input,
            start,
            end,
            ignore_bookings,
        } => {
            let device = if ignore_bookings {
                None
            } else {
                Some(read_device(input.as_deref())?)
            };
            let range = equipment_booking::valid_range(start, end, device.as_ref());
            debug!(days = range.len(), "range computed");
            println!("{}", serde_json::to_string_pretty(&range)?);
        }
        Commands::Marks {
            input,
            start,
            end,
            disabled,
        } => {
            let device = read_device(input.as_deref())?;
            let range = equipment_booking::valid_range(start, end, Some(&device));
            let marked = equipment_booking::generate_marked_dates(!disabled, &theme, &range);
            println!("{}", serde_json::to_string_pretty(&marked)?);
        }
        Commands::Locked { input } => {
            let device = read_device(input.as_deref())?;
            let locked = equipment_booking::locked_dates(&device, &theme);
            println!("{}", serde_json::to_string_pretty(&locked)?);
        }
    }

    Ok(())
}

fn status_report(device: &Device, rents: &[RentedDevice], clock: &dyn Clock) -> StatusReport {
    let status = DeviceStatus::of(device, rents, clock);
    StatusReport {
        id: device.id,
        name: device.name.clone(),
        available: equipment_booking::is_equipment_available(device, clock),
        first_availability: equipment_booking::iso_day(
            equipment_booking::first_equipment_availability(device, clock),
        ),
        description: status.description(device, clock, &EnglishLocalizer),
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_day_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    equipment_booking::parse_day(s).map_err(|e| e.to_string())
}

fn read_device(path: Option<&str>) -> Result<Device> {
    let json = read_input(path)?;
    Device::from_json(&json).context("Failed to parse device JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn read_file(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}
