//! Terminal blackjack.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjterm::{Difficulty, GameOptions, Session, StdioPrompt, logging};
use pico_args::Arguments;

const HELP: &str = "\
Play blackjack against the dealer in the terminal

USAGE:
  bjterm [OPTIONS]

OPTIONS:
  --seed        N        Seed for the shuffles  [default: env BJTERM_SEED or the system clock]
  --difficulty  N        1 = Normal, 2 = Fixed; skips the startup question

FLAGS:
  -v, --verbose          More log output on stderr (repeat for more)
  -h, --help             Print help information

ENVIRONMENT:
  RUST_LOG               Log filter, overrides -v
  BJTERM_SEED            Default seed
";

struct Args {
    seed: u64,
    difficulty: Option<Difficulty>,
    verbosity: u8,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let mut verbosity: u8 = 0;
    while pargs.contains(["-v", "--verbose"]) {
        verbosity = verbosity.saturating_add(1);
    }

    let seed = match pargs.opt_value_from_str::<_, u64>("--seed")? {
        Some(seed) => seed,
        None => std::env::var("BJTERM_SEED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(clock_seed),
    };

    let args = Args {
        seed,
        difficulty: pargs.opt_value_from_str("--difficulty")?,
        verbosity,
    };

    let rest = pargs.finish();
    if !rest.is_empty() {
        eprintln!("Warning: unused arguments left: {rest:?}");
    }

    Ok(args)
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(args.verbosity);
    tracing::debug!(seed = args.seed, "starting");

    let mut options = GameOptions::default();
    if let Some(difficulty) = args.difficulty {
        options = options.with_difficulty(difficulty);
    }

    let mut session = Session::new(options, args.seed);
    let mut prompt = StdioPrompt::new();

    match session.run(&mut prompt) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "session ended with an error");
            eprintln!("\nError: {err}");
            ExitCode::FAILURE
        }
    }
}
