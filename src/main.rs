use analytics::{CarbonScoreCalculator, EsgCompositeScorer, known_answers, self_check};
use anyhow::{Context, Result};
use batch_loader::{DEFAULT_BATCH_FILE, load_records, score_records};
use clap::{Parser, Subcommand};
use configuration::{CarbonSettings, Config, RatioMode};
use core_types::EsgInputs;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the carbon/ESG scoring tool.
fn main() -> Result<()> {
    // Load CARBON_ESG__* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => configuration::load_config_from(path),
        None => configuration::load_config(),
    }
    .context("Failed to load configuration")?;

    init_tracing(&config.logging.filter)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Carbon(args) => handle_carbon(args, config),
        Commands::Esg(args) => handle_esg(args, config),
        Commands::SelfCheck(args) => handle_self_check(args, config),
    }
}

/// Logs go to stderr so stdout carries only results. `RUST_LOG` wins over the configured filter.
fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .context("Invalid log filter")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Carbon liability and ESG composite scoring for financial holdings.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of ./config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every record of a batch file and print `<ISIN>: <score>` lines.
    Carbon(CarbonArgs),
    /// Compute the ESG composite score from three sub-scores in [0, 1].
    Esg(EsgArgs),
    /// Run the known-answer regression vectors against the configured calculator.
    SelfCheck(SelfCheckArgs),
}

#[derive(Parser)]
struct CarbonArgs {
    /// The batch JSON file to evaluate.
    #[arg(default_value = DEFAULT_BATCH_FILE)]
    file: PathBuf,

    /// Override how the purchased-renewables ratio is evaluated.
    #[arg(long, value_enum)]
    ratio_mode: Option<RatioMode>,

    /// Do not run the known-answer vectors before reading the batch file.
    #[arg(long)]
    skip_self_check: bool,
}

#[derive(Parser)]
struct EsgArgs {
    // Negative values must reach `EsgInputs::new` so they are reported as out of range.
    #[arg(long, allow_negative_numbers = true)]
    environmental: Decimal,

    #[arg(long, allow_negative_numbers = true)]
    social: Decimal,

    #[arg(long, allow_negative_numbers = true)]
    governance: Decimal,

    /// Fractional digits to round to (defaults to esg.precision).
    #[arg(long)]
    precision: Option<u32>,
}

#[derive(Parser)]
struct SelfCheckArgs {
    /// Override how the purchased-renewables ratio is evaluated.
    #[arg(long, value_enum)]
    ratio_mode: Option<RatioMode>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn carbon_calculator(
    mut params: CarbonSettings,
    ratio_mode: Option<RatioMode>,
) -> Result<CarbonScoreCalculator> {
    if let Some(mode) = ratio_mode {
        params.ratio_mode = mode;
    }
    tracing::debug!(?params, "Building carbon calculator.");
    Ok(CarbonScoreCalculator::new(params)?)
}

/// Handles the batch evaluation: self-check, load, score, print.
fn handle_carbon(args: CarbonArgs, config: Config) -> Result<()> {
    let run_self_check = config.carbon.self_check_on_start && !args.skip_self_check;
    let calculator = carbon_calculator(config.carbon, args.ratio_mode)?;

    // The gate runs before any external data is touched.
    if run_self_check {
        self_check(&calculator).context("Calculator self-check failed; no data was processed")?;
        tracing::info!("Calculator self-check passed.");
    }

    let records = load_records(&args.file)
        .with_context(|| format!("Failed to load batch file {}", args.file.display()))?;
    let scored = score_records(&calculator, &records)?;

    for line in &scored {
        println!("{line}");
    }
    tracing::info!(count = scored.len(), "Batch evaluation complete.");
    Ok(())
}

fn handle_esg(args: EsgArgs, config: Config) -> Result<()> {
    let scorer = EsgCompositeScorer::new(config.esg)?;
    let inputs = EsgInputs::new(args.environmental, args.social, args.governance)
        .context("ESG sub-scores rejected")?;

    let score = match args.precision {
        Some(precision) => scorer.score_with_precision(&inputs, precision)?,
        None => scorer.score(&inputs)?,
    };
    println!("{score}");
    Ok(())
}

fn handle_self_check(args: SelfCheckArgs, config: Config) -> Result<()> {
    let calculator = carbon_calculator(config.carbon, args.ratio_mode)?;
    self_check(&calculator)?;
    println!("All {} known-answer vectors passed.", known_answers().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use core_types::CoreError;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_esg_sub_score_is_parsed_and_then_rejected() {
        let cli = Cli::try_parse_from([
            "carbon-esg",
            "esg",
            "--environmental",
            "0.5",
            "--social",
            "-0.1",
            "--governance",
            "0.5",
        ])
        .unwrap();
        let Commands::Esg(args) = cli.command else {
            panic!("expected the esg subcommand");
        };
        assert_eq!(args.social, "-0.1".parse::<Decimal>().unwrap());

        let err = EsgInputs::new(args.environmental, args.social, args.governance).unwrap_err();
        assert!(matches!(err, CoreError::OutOfRangeEsgInput { ref field, .. } if field == "social"));
    }
}
