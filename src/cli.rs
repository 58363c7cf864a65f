use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use primecaster::utils::{MAX_LEVEL, parse_dice, primes_for_level, roll_dice, validate_dice, validate_primes};
use primecaster::{BatchOutcome, PrimeSolver, SearchBudget, SolverConfig};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Primecaster - combine rolled dice into target primes
#[derive(Parser, Debug)]
#[command(name = "primecaster")]
#[command(about = "Roll dice and search for arithmetic combinations that reach each target prime")]
#[command(version)]
pub struct CliArgs {
    /// Difficulty level selecting the target primes
    #[arg(short = 'L', long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=MAX_LEVEL as i64))]
    pub level: u8,

    /// Number of d6 to roll
    #[arg(short, long, default_value_t = 6)]
    pub dice: usize,

    /// Use these dice instead of rolling, e.g. 1,4,4,6
    #[arg(long)]
    pub values: Option<String>,

    /// Use these targets instead of the level table, e.g. 3,5,7
    #[arg(long, value_delimiter = ',')]
    pub primes: Option<Vec<i64>>,

    /// Seed for the dice roll
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop each search after this many evaluations
    #[arg(long)]
    pub max_evaluations: Option<u64>,

    /// Stop each search after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Worker threads (0 uses every core)
    #[arg(short, long, default_value_t = 0)]
    pub workers: usize,

    /// Read each found expression back with standard precedence
    #[arg(long)]
    pub verify: bool,

    /// Show dice and search statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub dice: Vec<i64>,
    pub primes: Vec<i64>,
    pub solver: SolverConfig,
    pub verify: bool,
    pub verbose: bool,
}

fn budget_from_args(args: &CliArgs) -> SearchBudget {
    let mut budget = SearchBudget::unlimited();
    if let Some(max) = args.max_evaluations {
        budget = budget.with_max_evaluations(max);
    }
    if let Some(ms) = args.timeout_ms {
        budget = budget.with_timeout(Duration::from_millis(ms));
    }
    budget
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let dice = match &args.values {
        Some(list) => parse_dice(list).context("Invalid dice values")?,
        None => {
            let mut rng = match args.seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            roll_dice(args.dice, &mut rng)
        }
    };
    validate_dice(&dice).context("Invalid dice pool")?;

    let primes = match &args.primes {
        Some(primes) => primes.clone(),
        None => primes_for_level(usize::from(args.level))
            .context("Invalid level")?
            .to_vec(),
    };
    validate_primes(&primes).context("Invalid target primes")?;

    Ok(CliConfig {
        dice,
        primes,
        solver: SolverConfig {
            budget: budget_from_args(&args),
            workers: args.workers,
        },
        verify: args.verify,
        verbose: args.verbose,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

fn report(outcome: &BatchOutcome, verbose: bool) {
    for result in &outcome.results {
        if verbose {
            println!(
                "{} ({} evaluations, {} rejected)",
                result, result.evaluations, result.rejected
            );
        } else {
            println!("{}", result);
        }
    }

    if outcome.success {
        println!("Success! Every prime was found.");
    } else {
        println!("Failed to find all required primes.");
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Must run before dice are rolled or validated
    init_logging(&args.log_level)?;
    let config = config_from_args(args)?;

    if config.verbose {
        println!("Dice ({}): {:?}", config.dice.len(), config.dice);
        println!("Targets: {:?}", config.primes);
    }
    info!(
        "Searching {} dice for primes {:?}",
        config.dice.len(),
        config.primes
    );

    let solver = PrimeSolver::new(config.solver);
    let outcome = solver
        .solve_all(&config.dice, &config.primes)
        .context("Search failed")?;

    if config.verify {
        outcome
            .verify()
            .context("A found expression did not read back to its prime")?;
        info!("All found expressions verified");
    }

    if !outcome.success {
        warn!("Not every prime was reachable");
    }
    report(&outcome, config.verbose);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliConfig> {
        let args = CliArgs::try_parse_from(args.iter().copied())?;
        config_from_args(args)
    }

    #[test]
    fn test_explicit_values_and_level() {
        let config = parse(&["primecaster", "--values", "1,2,3,4", "--level", "2"]);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.dice, vec![1, 2, 3, 4]);
            assert_eq!(config.primes, vec![11, 13, 17]);
            assert!(config.solver.budget.is_unlimited());
        }
    }

    #[test]
    fn test_seeded_roll_is_repeatable() {
        let first = parse(&["primecaster", "--dice", "8", "--seed", "99"]);
        let second = parse(&["primecaster", "--dice", "8", "--seed", "99"]);
        assert!(first.is_ok() && second.is_ok());
        if let (Ok(first), Ok(second)) = (first, second) {
            assert_eq!(first.dice.len(), 8);
            assert_eq!(first.dice, second.dice);
        }
    }

    #[test]
    fn test_custom_primes_and_budget() {
        let config = parse(&[
            "primecaster",
            "--values",
            "6,6,5",
            "--primes",
            "11,17",
            "--max-evaluations",
            "500",
            "--timeout-ms",
            "250",
            "--workers",
            "2",
        ]);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.primes, vec![11, 17]);
            assert_eq!(config.solver.budget.max_evaluations, Some(500));
            assert_eq!(
                config.solver.budget.timeout,
                Some(Duration::from_millis(250))
            );
            assert_eq!(config.solver.workers, 2);
        }
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["primecaster", "--values", "1,0,3"]).is_err());
        assert!(parse(&["primecaster", "--values", "1,a"]).is_err());
        assert!(parse(&["primecaster", "--dice", "0"]).is_err());
        assert!(parse(&["primecaster", "--level", "10"]).is_err());
        assert!(parse(&["primecaster", "--primes", "2,3,5,7"]).is_err());
    }

    #[test]
    fn test_log_level_is_read_before_dice_are_checked() {
        let args = CliArgs::try_parse_from([
            "primecaster",
            "--values",
            "1,0",
            "--log-level",
            "debug",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(matches!(args.log_level, LogLevel::Debug));
            assert!(config_from_args(args).is_err());
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
