//! EV Charge CLI — demo walkthrough, catalog loading, one-off efficiency.
//!
//! Commands:
//! - `demo` — run the scripted factory / builder / registry / enhancement walkthrough
//! - `catalog` — build stations from a TOML catalog and list them
//! - `efficiency` — score a single station without a catalog

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use evcharge_core::components::{
    build_catalog, create_station, create_station_with_strategy, create_strategy,
    ChargingStation, RenewableEnergyEnhancement,
};
use evcharge_core::config::{CatalogConfig, DEFAULT_CHARGING_HOURS};
use evcharge_core::demo::run_demo;
use evcharge_core::registry::StationRegistry;
use evcharge_core::report::{station_report, RegistrySummary};

#[derive(Parser)]
#[command(
    name = "evcharge",
    about = "EV Charge CLI — charging station catalog and efficiency scoring"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted catalog walkthrough.
    Demo {
        /// Charging session length in hours.
        #[arg(long, default_value_t = DEFAULT_CHARGING_HOURS)]
        hours: f64,
    },
    /// Build and list the stations in a TOML catalog file.
    Catalog {
        /// Path to the catalog file.
        path: PathBuf,

        /// Session length in hours. Defaults to the catalog's `charging_hours`.
        #[arg(long)]
        hours: Option<f64>,

        /// Only list stations with at least this capacity (kW).
        #[arg(long)]
        min_capacity: Option<u32>,

        /// Print a JSON summary instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Score one station.
    Efficiency {
        /// Station kind: fast or slow.
        #[arg(long)]
        kind: String,

        /// Capacity in kW.
        #[arg(long)]
        capacity: u32,

        /// Charging session length in hours.
        #[arg(long, default_value_t = DEFAULT_CHARGING_HOURS)]
        hours: f64,

        /// Strategy override: fast or cost_effective. Defaults by kind.
        #[arg(long)]
        strategy: Option<String>,

        /// Wrap the station in the renewable energy enhancement.
        #[arg(long, default_value_t = false)]
        renewable: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo { hours } => run_demo_cmd(hours),
        Commands::Catalog {
            path,
            hours,
            min_capacity,
            json,
        } => run_catalog(&path, hours, min_capacity, json),
        Commands::Efficiency {
            kind,
            capacity,
            hours,
            strategy,
            renewable,
        } => run_efficiency(&kind, capacity, hours, strategy.as_deref(), renewable),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_demo_cmd(hours: f64) -> Result<()> {
    let registry = StationRegistry::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(hours, &registry, &mut out)?;
    Ok(())
}

fn run_catalog(
    path: &Path,
    hours: Option<f64>,
    min_capacity: Option<u32>,
    json: bool,
) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
    let config = CatalogConfig::from_toml_str(&text)
        .with_context(|| format!("Invalid catalog: {}", path.display()))?;

    let registry = StationRegistry::new();
    build_catalog(&config, &registry)
        .with_context(|| format!("Failed to build catalog: {}", path.display()))?;

    let hours = hours.unwrap_or(config.charging_hours);
    tracing::debug!(path = %path.display(), stations = registry.len(), hours, "catalog loaded");
    let summary = RegistrySummary::from_registry(&registry, hours, min_capacity);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Catalog: {}", path.display());
    println!("Fingerprint: {}", config.fingerprint());
    println!("Stations: {}", summary.station_count);
    println!("Total capacity: {} kW", summary.total_capacity_kw);
    if let Some(min) = min_capacity {
        println!("Showing stations with capacity >= {min} kW");
    }
    println!();

    if summary.stations.is_empty() {
        println!("No stations available");
        return Ok(());
    }
    for station in &summary.stations {
        let efficiency = station
            .efficiency
            .map_or_else(|| "n/a".to_string(), |v| v.to_string());
        println!("{}", station.rendered);
        println!(
            "  efficiency @ {hours}h: {efficiency}, blocked: {}h",
            station.blocked_hours
        );
    }
    Ok(())
}

fn run_efficiency(
    kind: &str,
    capacity: u32,
    hours: f64,
    strategy: Option<&str>,
    renewable: bool,
) -> Result<()> {
    let station = match strategy {
        Some(name) => {
            create_station_with_strategy(kind, 0, capacity, vec![], create_strategy(name)?)?
        }
        None => create_station(kind, 0, capacity, vec![])?,
    };
    let mut station: Arc<dyn ChargingStation> = Arc::new(station);
    if renewable {
        station = Arc::new(RenewableEnergyEnhancement::new(station));
    }

    let score = match station.efficiency(hours) {
        Ok(score) => score,
        Err(e) => bail!("Cannot score station: {e}"),
    };
    println!("{}", station_report(station.as_ref()));
    println!("Efficiency @ {hours}h: {score}");
    Ok(())
}
