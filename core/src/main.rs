use clap::Parser;
use tracing_subscriber::EnvFilter;

use workout_core::cli::{print_report, Cli};
use workout_core::metrics;

fn init_logging(level: Option<&str>) {
    // Logg til stderr; stdout er forbeholdt rapporten
    let filter = match level {
        Some(l) => EnvFilter::new(l),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let packages = cli.packages()?;
    let stdout = std::io::stdout();
    print_report(&packages, cli.format, &mut stdout.lock())?;

    if cli.metrics {
        eprint!("{}", metrics::gather_text());
    }
    Ok(())
}
