use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bookfees::cli::{
    handle_pair_command, handle_range_command, handle_reformat_command, handle_report_command,
    PairArgs, RangeArgs, ReformatArgs, ReportArgs,
};
use bookfees::config::{ConfigPaths, Settings};

#[derive(Parser)]
#[command(
    name = "bookfees",
    version,
    about = "Date helpers and library late-fee reports",
    long_about = "bookfees reformats and generates ISO dates, and totals late fees \
                  per patron from a library checkout CSV."
)]
struct Cli {
    /// Settings file (defaults to $BOOKFEES_CONFIG or ~/.config/bookfees/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log each late return to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reformat yyyy-mm-dd dates as "dd Mon yyyy"
    Reformat(ReformatArgs),

    /// Print N consecutive dates starting at START
    Range(RangeArgs),

    /// Pair values with consecutive dates starting at START
    Pair(PairArgs),

    /// Compute late fees per patron from a checkout CSV
    Report(ReportArgs),

    /// Show the config file location and effective settings
    Config,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Reformat(args) => handle_reformat_command(args)?,
        Commands::Range(args) => handle_range_command(args)?,
        Commands::Pair(args) => handle_pair_command(args)?,
        Commands::Report(args) => {
            let paths = ConfigPaths::resolve(cli.config)?;
            let settings = Settings::load_or_default(&paths)
                .with_context(|| format!("loading {}", paths.settings_file().display()))?;
            let infile = args.infile.clone();
            handle_report_command(&settings, args)
                .with_context(|| format!("fees report for {}", infile.display()))?;
        }
        Commands::Config => {
            let paths = ConfigPaths::resolve(cli.config)?;
            let settings = Settings::load_or_default(&paths)?;
            println!("bookfees Configuration");
            println!("======================");
            println!("Config file: {}", paths.settings_file().display());
            println!(
                "  (exists: {})",
                if paths.settings_file().exists() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Daily rate:           {}", settings.daily_rate.to_decimal_string());
            println!("  Checkout date format: {}", settings.checkout_date_format);
            println!("  Output order:         {:?}", settings.output_order);
        }
    }

    Ok(())
}
