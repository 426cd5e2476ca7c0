use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{debug, warn};

use crate::error::WorkoutError;
use crate::metrics;
use crate::package::{default_packages, Package};
use crate::storage::load_packages;
use crate::types::InfoMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Én lesbar linje per økt
    #[default]
    Text,
    /// Én JSON-linje per økt
    Json,
}

/// Oppsummering av treningsøkter fra sensorpakker.
#[derive(Debug, Parser)]
#[command(name = "workout-report", version)]
pub struct Cli {
    /// JSON-fil med pakker; uten denne brukes innebygde testdata
    #[arg(long)]
    pub packages: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Overstyrer RUST_LOG (f.eks. debug)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Skriv prometheus-tellere til stderr etter rapporten
    #[arg(long)]
    pub metrics: bool,
}

impl Cli {
    pub fn packages(&self) -> anyhow::Result<Vec<Package>> {
        match &self.packages {
            Some(path) => load_packages(path)
                .with_context(|| format!("kunne ikke laste pakker fra {}", path.display())),
            None => Ok(default_packages()),
        }
    }
}

/// Behandler pakkene i rekkefølge. Første feil avbryter hele batchen.
pub fn run_packages(packages: &[Package]) -> Result<Vec<InfoMessage>, WorkoutError> {
    let mut out = Vec::with_capacity(packages.len());
    for (i, package) in packages.iter().enumerate() {
        let training = match package.read() {
            Ok(t) => t,
            Err(e) => {
                warn!("pakke #{i} ({}) avvist: {e}", package.workout_type);
                metrics::inc_rejected(e.reason());
                return Err(e);
            }
        };
        let info = training.show_training_info();
        debug!("pakke #{i}: {info:?}");
        metrics::inc_processed(&info.training_type);
        out.push(info);
    }
    Ok(out)
}

/// Skriver én linje per pakke.
pub fn print_report<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let messages = run_packages(packages)?;
    for message in &messages {
        match format {
            OutputFormat::Text => writeln!(out, "{}", message.get_message())?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(message)?)?,
        }
    }
    Ok(())
}
