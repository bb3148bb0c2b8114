use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

use practice_drills::{
    calculate, first_turn, load_ledger, parse_card, parsing_log_files, weather, Bill, UnitTable,
};

/// Run individual practice drills from the command line
#[derive(Parser)]
#[command(name = "drills")]
#[command(about = "drills - card values, bills, log parsing and friends", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the blackjack value of a card
    Card {
        /// Card name, e.g. "ace" or "seven"
        name: String,
    },

    /// Decide the first blackjack move
    FirstTurn {
        card1: String,
        card2: String,
        dealer: String,
    },

    /// Replay a bill ledger CSV (action,item,unit) and print the bill
    Bill {
        ledger: PathBuf,

        /// JSON unit table to use instead of the built-in one
        #[arg(long, env = "DRILLS_UNITS")]
        units: Option<PathBuf>,
    },

    /// Print a forecast line
    Forecast { city: String, condition: String },

    /// Report which lines start with a known log level tag
    ValidateLog {
        #[arg(required = true)]
        lines: Vec<String>,
    },

    /// Integer calculator supporting +, * and /
    Calc {
        #[arg(allow_negative_numbers = true)]
        first: i64,
        operation: String,
        #[arg(allow_negative_numbers = true)]
        second: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!("drills started with verbosity level: {}", cli.verbose);

    match cli.command {
        Commands::Card { name } => {
            let value = parse_card(&name);
            if value == 0 {
                info!(card = %name, "not a card");
            }
            println!("{}", value);
        }
        Commands::FirstTurn { card1, card2, dealer } => {
            println!("{}", first_turn(&card1, &card2, &dealer));
        }
        Commands::Bill { ledger, units } => run_bill(ledger, units)?,
        Commands::Forecast { city, condition } => {
            println!("{}", weather::forecast(&city, &condition));
        }
        Commands::ValidateLog { lines } => {
            for line in &lines {
                let status = if parsing_log_files::is_valid_line(line) { "valid" } else { "invalid" };
                println!("{:<8} {}", status, line);
            }
        }
        Commands::Calc { first, operation, second } => {
            println!("{}", calculate(first, second, &operation)?);
        }
    }

    Ok(())
}

fn run_bill(ledger: PathBuf, units: Option<PathBuf>) -> Result<()> {
    let units = match units {
        Some(path) => {
            info!(path = %path.display(), "loading unit table");
            UnitTable::from_file(&path)?
        }
        None => UnitTable::default(),
    };

    let bill = load_ledger(&ledger, &units)
        .with_context(|| format!("Failed to replay ledger {:?}", ledger))?;

    for line in render_bill(&bill) {
        println!("{}", line);
    }

    Ok(())
}

fn render_bill(bill: &Bill) -> Vec<String> {
    if bill.is_empty() {
        return vec!["(empty bill)".to_string()];
    }

    bill.sorted_items()
        .into_iter()
        .map(|(item, quantity)| format!("{:<20} {}", item, quantity))
        .collect()
}

/// Log to stderr; RUST_LOG overrides the -v level
fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}
