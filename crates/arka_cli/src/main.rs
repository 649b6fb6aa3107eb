use std::fmt::Display;

use arka_core::{NoEventKind, SolarDay, SolarEngine, SolarError};
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "arka", about = "Arka solar event CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// All nine solar events for a date and location
    Events {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Display offset from UTC (e.g. +01:00); UTC if omitted
        #[arg(long)]
        offset: Option<String>,
        /// Emit the event bundle as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sunrise time
    Sunrise {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Display offset from UTC (e.g. +01:00); UTC if omitted
        #[arg(long)]
        offset: Option<String>,
    },
    /// Sunset time
    Sunset {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Display offset from UTC (e.g. +01:00); UTC if omitted
        #[arg(long)]
        offset: Option<String>,
    },
    /// Solar noon (transit) time
    Noon {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Display offset from UTC (e.g. +01:00); UTC if omitted
        #[arg(long)]
        offset: Option<String>,
    },
    /// Daylight duration (sunset minus sunrise)
    Daylight {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
    },
}

fn parse_date(s: &str) -> NaiveDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date '{s}': {e} (expected YYYY-MM-DD)");
        std::process::exit(1);
    })
}

fn parse_offset(s: &str) -> FixedOffset {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid offset '{s}': {e} (expected e.g. +01:00)");
        std::process::exit(1);
    })
}

fn print_row<Tz: TimeZone>(label: &str, value: &Option<DateTime<Tz>>)
where
    Tz::Offset: Display,
{
    match value {
        Some(t) => println!("  {label:18} {t}"),
        None => println!("  {label:18} does not occur"),
    }
}

fn print_day<Tz: TimeZone>(day: &SolarDay<Tz>)
where
    Tz::Offset: Display,
{
    print_row("astronomical dawn", &day.astronomical_dawn);
    print_row("nautical dawn", &day.nautical_dawn);
    print_row("civil dawn", &day.civil_dawn);
    print_row("sunrise", &day.sunrise);
    println!("  {:18} {}", "solar noon", day.solar_noon);
    print_row("sunset", &day.sunset);
    print_row("civil dusk", &day.civil_dusk);
    print_row("nautical dusk", &day.nautical_dusk);
    print_row("astronomical dusk", &day.astronomical_dusk);
}

fn print_single(result: Result<DateTime<FixedOffset>, SolarError>) {
    match result {
        Ok(t) => println!("{t}"),
        Err(SolarError::NoEvent(NoEventKind::PolarNight)) => {
            println!("does not occur (polar night)")
        }
        Err(SolarError::NoEvent(NoEventKind::PolarDay)) => {
            println!("does not occur (polar day)")
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Events {
            date,
            lat,
            lon,
            offset,
            json,
        } => {
            let engine = SolarEngine::new(lat, lon);
            let d = parse_date(&date);
            let tz = offset
                .as_deref()
                .map(parse_offset)
                .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
            let day = engine.day_events_in(d, &tz).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });

            if json {
                println!("{}", serde_json::to_string_pretty(&day).unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }));
            } else {
                println!("Solar events for {date} at {lat:.4}°, {lon:.4}°:\n");
                print_day(&day);
            }
        }

        Commands::Sunrise {
            date,
            lat,
            lon,
            offset,
        } => {
            let engine = SolarEngine::new(lat, lon);
            let d = parse_date(&date);
            let tz = offset
                .as_deref()
                .map(parse_offset)
                .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
            print_single(engine.event_in(d, arka_core::SolarEvent::Sunrise, &tz));
        }

        Commands::Sunset {
            date,
            lat,
            lon,
            offset,
        } => {
            let engine = SolarEngine::new(lat, lon);
            let d = parse_date(&date);
            let tz = offset
                .as_deref()
                .map(parse_offset)
                .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
            print_single(engine.event_in(d, arka_core::SolarEvent::Sunset, &tz));
        }

        Commands::Noon {
            date,
            lat,
            lon,
            offset,
        } => {
            let engine = SolarEngine::new(lat, lon);
            let d = parse_date(&date);
            let tz = offset
                .as_deref()
                .map(parse_offset)
                .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
            print_single(engine.solar_noon_in(d, &tz));
        }

        Commands::Daylight { date, lat, lon } => {
            let engine = SolarEngine::new(lat, lon);
            let d = parse_date(&date);
            let length = engine.day_length(d);
            let total = length.num_seconds();
            println!(
                "{}h {:02}m {:02}s",
                total / 3600,
                (total % 3600) / 60,
                total % 60
            );
        }
    }
}
