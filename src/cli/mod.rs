use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::debug;

use crate::{
    config::{ConfigManager, ForecastConfig},
    errors::Result,
    forecast::ForecastEngine,
    output,
    storage::JsonStore,
    utils,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("MON_BUILD_HASH"),
    " (",
    env!("MON_BUILD_STATUS"),
    ")\nbuilt: ",
    env!("MON_BUILD_TIMESTAMP"),
    "\ntarget: ",
    env!("MON_BUILD_TARGET"),
    " (",
    env!("MON_BUILD_PROFILE"),
    ")\nrustc: ",
    env!("MON_BUILD_RUSTC"),
);

/// Prints a tab separated balance forecast for every account.
#[derive(Debug, Parser)]
#[command(name = "montsv")]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Account store file
    #[arg(short = 's', long, env = "MON_STORE")]
    pub store: Option<PathBuf>,

    /// Configuration file holding the recurring rules
    #[arg(short, long, env = "MON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Days before now to provide data for
    #[arg(long, env = "MON_HISTORIC_DAYS")]
    pub historic_days: Option<u32>,

    /// Days in the future to provide data for
    #[arg(long, env = "MON_FORECAST_DAYS")]
    pub forecast_days: Option<u32>,

    /// Write the report here instead of stdout
    #[arg(short, long, env = "MON_OUTPUT")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file and applies flag overrides on top of it.
    pub fn resolve_config(&self) -> Result<ForecastConfig> {
        let manager = match &self.config {
            Some(path) => ConfigManager::at(path),
            None => ConfigManager::new(),
        };
        let mut config = manager.load()?;
        if let Some(days) = self.historic_days {
            config.historic_days = days;
        }
        if let Some(days) = self.forecast_days {
            config.forecast_days = days;
        }
        Ok(config)
    }

    pub fn run(&self, reference: DateTime<Utc>) -> Result<()> {
        let config = self.resolve_config()?;
        let store_path = self.store.clone().unwrap_or_else(utils::store_file);
        let store = JsonStore::open(store_path)?;
        debug!(
            historic_days = config.historic_days,
            forecast_days = config.forecast_days,
            "running forecast"
        );

        let report = ForecastEngine::new(&store, &config).run(reference)?;

        match &self.output {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                output::write_report(&report, &mut writer)?;
                writer.flush()?;
            }
            None => {
                let stdout = io::stdout();
                output::write_report(&report, stdout.lock())?;
            }
        }
        Ok(())
    }
}

/// Parses process arguments and runs one report against the current time.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    cli.run(Utc::now())
}
