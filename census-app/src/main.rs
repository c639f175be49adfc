//! Household census front end
//!
//! Reads commands from stdin, one per line, and prints results to stdout.
//! Logs go to stderr.

mod commands;
mod error;
mod render;
mod repl;
mod state;
mod validation;

use census::Locale;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use repl::Outcome;
use state::{AppConfig, AppState, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LocaleArg {
    Marathi,
    English,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Marathi => Locale::Marathi,
            LocaleArg::English => Locale::English,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "census")]
#[command(about = "Record households and their members, and report live demographics")]
struct Args {
    /// Reference date for ages (YYYY-MM-DD); follows the wall clock if not set
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Language for ages, genders and group labels
    #[arg(long, value_enum, default_value = "marathi")]
    locale: LocaleArg,

    /// Print command results as JSON
    #[arg(long)]
    json: bool,

    /// Households per page in `list`
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Start the session with this many generated households
    #[arg(long, default_value = "0")]
    sample: usize,

    /// Random seed for generated households (random if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum log level
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig {
        locale: args.locale.into(),
        json: args.json,
        today: args.today,
        page_size: args.page_size.max(1),
        sample_households: args.sample,
        seed: args.seed,
        log_level: args.log_level.to_string(),
    };
    let mut state = AppState::new(config);

    if args.sample > 0 {
        commands::households::seed_sample(&mut state, args.sample);
    }

    info!("Census session started ({} households)", state.registry.household_count());

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();

    if interactive {
        writeln!(stdout, "Type 'help' for commands.")?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match repl::run_line(&mut state, &line) {
            Ok(Outcome::Output(text)) => writeln!(stdout, "{}", text)?,
            Ok(Outcome::Empty) => {}
            Ok(Outcome::Quit) => break,
            Err(e) => {
                warn!("Command failed: {}", e);
                if state.config.json {
                    let message = serde_json::json!({ "error": e.to_string() });
                    writeln!(stdout, "{}", message)?;
                } else {
                    writeln!(stdout, "Error: {}", e)?;
                }
            }
        }
    }

    info!(
        "Census session ended ({} households, {} people)",
        state.registry.household_count(),
        state.registry.population_count()
    );
    Ok(())
}
