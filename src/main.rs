use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use roamgenie::core::config::{self, CliOverrides};
use roamgenie::core::region::Region;
use roamgenie::core::trip;
use roamgenie::{DatasetLoader, SessionContext, VisaDataset, parse_passport_text};
use serde::Serialize;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "roamgenie", about = "Visa-free destinations for your passport")]
struct Args {
    /// Passport country, e.g. "India"
    #[arg(short, long)]
    passport: Option<String>,

    /// File with OCR text of a passport page; detects the country
    #[arg(long, value_name = "FILE")]
    scan_text: Option<PathBuf>,

    /// IATA code of a trip destination to check, e.g. BKK
    #[arg(short, long)]
    destination: Option<String>,

    /// Only show destinations containing this text
    #[arg(short, long)]
    filter: Option<String>,

    /// Skip the remote datasets and use built-in data
    #[arg(long)]
    offline: bool,

    /// List passport countries present in the dataset and exit
    #[arg(long)]
    list_passports: bool,

    /// Print a JSON summary instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Summary<'a> {
    session: &'a SessionContext,
    dataset_origin: roamgenie::dataset::DatasetOrigin,
    regions: roamgenie::RegionCounts,
    /// Destinations matching `--filter`, present only when a filter is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    matching: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trip: Option<TripSummary>,
}

fn summarize<'a>(
    session: &'a SessionContext,
    dataset: &VisaDataset,
    filter: Option<&str>,
    trip: Option<TripSummary>,
) -> Summary<'a> {
    Summary {
        session,
        dataset_origin: dataset.origin,
        regions: session.region_summary(),
        matching: filter.map(|q| trip::filter_destinations(session.visa_free_destinations(), q)),
        trip,
    }
}

#[derive(Serialize)]
struct TripSummary {
    destination: String,
    country: Option<&'static str>,
    status: trip::TripVisaStatus,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to roamgenie.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("roamgenie.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        eprintln!("warning: {e}, using defaults");
        config::RoamConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            passport: args.passport.clone(),
            offline: args.offline,
        },
    );
    log::info!("RoamGenie starting up: {:?}", resolved);

    let dataset = DatasetLoader::from_config(&resolved).load().await;

    if args.list_passports {
        for passport in trip::available_passports(&dataset) {
            println!("{passport}");
        }
        return Ok(());
    }

    let mut session = SessionContext::new();

    if let Some(path) = &args.scan_text {
        let text = std::fs::read_to_string(path)?;
        match parse_passport_text(&text) {
            Some(scan) => {
                eprintln!(
                    "Passport detected: {} (confidence: {:.0}%)",
                    scan.country,
                    scan.confidence * 100.0
                );
                session.apply_scan(&dataset, scan);
            }
            None => {
                eprintln!("Could not extract passport information from {}", path.display());
            }
        }
    }

    if session.passport_country.is_none() {
        match &resolved.passport {
            Some(passport) => {
                session.select_passport(&dataset, passport);
            }
            None => {
                eprintln!("No passport country given; use --passport or --scan-text");
                std::process::exit(2);
            }
        }
    }

    let trip_summary = args.destination.as_deref().map(|iata| TripSummary {
        destination: iata.trim().to_uppercase(),
        country: trip::destination_country(iata),
        status: trip::trip_visa_status(&session, iata),
    });

    if args.json {
        let summary = summarize(&session, &dataset, args.filter.as_deref(), trip_summary);
        let out = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
        println!("{out}");
    } else {
        print_report(&session, &dataset, args.filter.as_deref(), trip_summary.as_ref());
    }

    Ok(())
}

fn print_report(
    session: &SessionContext,
    dataset: &VisaDataset,
    filter: Option<&str>,
    trip_summary: Option<&TripSummary>,
) {
    let passport = session.passport_country.as_deref().unwrap_or_default();
    let visa_free = session.visa_free_destinations();

    println!("Dataset: {:?} ({} records)", dataset.origin, dataset.len());

    if let Some(lookup) = &session.lookup {
        if lookup.outcome == roamgenie::MatchOutcome::DatasetUnavailable {
            println!("No visa data available.");
            return;
        }
    }

    println!(
        "Visa-free destinations for {} passport holders: {}",
        passport,
        visa_free.len()
    );

    let popular = trip::popular_destinations(passport, visa_free);
    if !popular.is_empty() {
        println!("Popular picks: {}", popular.join(", "));
    }

    let shown = trip::filter_destinations(visa_free, filter.unwrap_or_default());
    if let Some(query) = filter {
        println!("{} countries matching '{}'", shown.len(), query);
    }
    for country in &shown {
        println!("  {country}");
    }

    let regions = session.region_summary();
    println!("Regional breakdown:");
    for region in Region::ALL {
        println!("  {:<12} {}", region.to_string(), regions.get(region));
    }
    if regions.unclassified > 0 {
        println!("  {:<12} {}", "Unclassified", regions.unclassified);
    }

    if let Some(t) = trip_summary {
        match t.country {
            Some(country) => println!("Trip to {} ({}): {}", t.destination, country, t.status),
            None => println!("Trip to {}: {}", t.destination, t.status),
        }
    }
}
