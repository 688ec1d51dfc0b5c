//! Sia Wallet Scanner CLI
//!
//! Recovers the used addresses of a Sia wallet seed.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zeroize::Zeroizing;

use sia_account_keys::Seed;
use sia_wallet_scanner::{
    cancel::CancellationToken,
    config::{OutputMode, ScannerConfig},
    derive::{derive_range, DerivedAddress},
    oracle::SiaCentralOracle,
    output::create_sink,
    progress::{ConsoleProgress, NoProgress, ProgressObserver},
    scanner::GapScanner,
};

const DEFAULT_CONFIG_PATH: &str = "scanner.toml";

#[derive(Parser)]
#[command(name = "sia-wallet-scanner")]
#[command(about = "Finds every address a Sia wallet seed has used")]
#[command(version)]
struct Cli {
    /// Path to configuration file [default: scanner.toml, if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan for used addresses until the gap limit is reached
    Scan(ScanArgs),

    /// Derive the address at an index
    DeriveAddress {
        /// Address index
        #[arg(short, long)]
        index: u64,
    },

    /// Derive multiple addresses
    DeriveAddressBatch {
        /// Starting index
        #[arg(short, long)]
        start: u64,

        /// Number of addresses to derive
        #[arg(short, long, default_value = "10")]
        count: u64,
    },

    /// Validate configuration file
    ValidateConfig,

    /// Check that a recovery phrase decodes
    ValidateSeed,
}

#[derive(Args)]
struct ScanArgs {
    /// Directory for the CSV output
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Stop after this many unused addresses past the last used one
    #[arg(long)]
    lookahead: Option<u64>,

    /// First index to scan
    #[arg(long)]
    start: Option<u64>,

    /// Addresses per oracle request
    #[arg(long)]
    batch_size: Option<u64>,

    /// Usage oracle endpoint
    #[arg(long)]
    oracle_url: Option<String>,

    /// Print used addresses to stdout as JSON lines instead of a CSV file
    #[arg(long)]
    stdout: bool,
}

impl ScanArgs {
    fn apply(self, config: &mut ScannerConfig) {
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(lookahead) = self.lookahead {
            config.lookahead = lookahead;
        }
        if let Some(start) = self.start {
            config.start_index = start;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(url) = self.oracle_url {
            config.oracle_url = url;
        }
        if self.stdout {
            config.output_mode = OutputMode::Stdout;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli.log_level)?;

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            if matches!(cli.command, Commands::ValidateConfig) {
                eprintln!("Configuration validation failed: {:#}", e);
                std::process::exit(1);
            }
            return Err(e);
        }
    };

    match cli.command {
        Commands::Scan(args) => {
            let mut config = config;
            args.apply(&mut config);
            config.validate().context("Invalid scan options")?;
            run_scan(&config).await
        }
        Commands::DeriveAddress { index } => derive_address(index),
        Commands::DeriveAddressBatch { start, count } => derive_address_batch(start, count),
        Commands::ValidateConfig => {
            println!("Configuration is valid.");
            println!("  Oracle: {}", config.oracle_url);
            println!("  Output mode: {:?}", config.output_mode);
            if config.output_mode == OutputMode::Csv {
                println!("  Output file: {}", config.output_path().display());
            }
            println!("  Start index: {}", config.start_index);
            println!("  Lookahead: {}", config.lookahead);
            println!("  Batch size: {}", config.batch_size);
            println!(
                "  Retries: {} (delay {}ms, max {}ms)",
                config.max_retries, config.retry_delay_ms, config.max_retry_delay_ms
            );
            Ok(())
        }
        Commands::ValidateSeed => validate_seed(),
    }
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level {:?}", level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ScannerConfig> {
    match path {
        Some(path) => ScannerConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path)),
        None => ScannerConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))
            .with_context(|| format!("Failed to load config from {:?}", DEFAULT_CONFIG_PATH)),
    }
}

/// Prompt for a recovery phrase on stdin and decode it.
fn prompt_seed() -> Result<Seed> {
    eprint!("Seed: ");
    io::stderr().flush()?;

    let mut phrase = Zeroizing::new(String::new());
    io::stdin()
        .lock()
        .read_line(&mut phrase)
        .context("Failed to read seed")?;

    Seed::decode(phrase.trim()).context("Invalid seed")
}

async fn run_scan(config: &ScannerConfig) -> Result<()> {
    let seed = prompt_seed()?;

    let oracle = SiaCentralOracle::from_config(config).context("Failed to create oracle client")?;
    let mut sink = create_sink(config).context("Failed to open output")?;

    let cancel = CancellationToken::new();
    cancel
        .cancel_on_ctrlc()
        .context("Failed to install Ctrl+C handler")?;

    // Stdout carries the records in stdout mode.
    let mut progress: Box<dyn ProgressObserver> = match config.output_mode {
        OutputMode::Csv => Box::new(ConsoleProgress::new()),
        OutputMode::Stdout => Box::new(NoProgress),
    };

    if config.output_mode == OutputMode::Csv {
        println!("Starting Detection... Press CTRL+C to stop.");
    }

    let mut scanner = GapScanner::from_config(seed, Box::new(oracle), config);
    let outcome = scanner
        .run(sink.as_mut(), progress.as_mut(), &cancel)
        .await?;

    match config.output_mode {
        OutputMode::Csv => {
            println!("{}", outcome.summary());
            println!(
                "Wrote {} addresses to {}",
                outcome.state.detected,
                config.output_path().display()
            );
        }
        OutputMode::Stdout => eprintln!("{}", outcome.summary()),
    }

    Ok(())
}

fn derive_address(index: u64) -> Result<()> {
    let seed = prompt_seed()?;
    let derived = DerivedAddress::derive(&seed, index);

    println!("Address {}:", index);
    println!("  Address: {}", derived.address);
    println!("  Public Key: ed25519:{}", derived.public_key_hex);

    Ok(())
}

fn derive_address_batch(start: u64, count: u64) -> Result<()> {
    let seed = prompt_seed()?;

    println!("Deriving {} addresses starting from index {}:", count, start);
    println!();

    for derived in derive_range(&seed, start, count) {
        println!("{}: {}", derived.index, derived.address);
    }

    Ok(())
}

fn validate_seed() -> Result<()> {
    let seed = prompt_seed()?;
    let first = DerivedAddress::derive(&seed, 0);

    println!("Seed is valid.");
    println!("  First address: {}", first.address);

    Ok(())
}
