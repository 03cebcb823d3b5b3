#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use output::{OutputMode, resolve_output_mode};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "selsort: selection sort by minimum extraction",
    long_about = None
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format: pretty, text, or json.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Only log errors (ignored when SELSORT_LOG is set).
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags and environment.
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Sorting",
        about = "Sort a sequence",
        long_about = "Sort a sequence of naturals by repeated minimum extraction.\n\
                      The fuel-bounded strategies are legacy entry points: with less fuel\n\
                      than elements they silently return a short, incomplete result.",
        after_help = "EXAMPLES:\n    # Sort with the default (measured) scheme\n    selsort sort 3,1,4,1,5\n\n    # Fuel-bounded sort with too little fuel\n    selsort sort 3,1,4,1,5 --strategy fuel:3\n\n    # Emit machine-readable output\n    selsort sort \"[3 1 4]\" --format json"
    )]
    Sort(cmd::sort::SortArgs),

    #[command(
        next_help_heading = "Sorting",
        about = "Extract the minimum",
        long_about = "Extract the minimum of a candidate and a sequence, printing the minimum\n\
                      and the remaining values in displacement order.",
        after_help = "EXAMPLES:\n    # Candidate 3 against 1,4,1,5\n    selsort select 3 1,4,1,5"
    )]
    Select(cmd::select::SelectArgs),

    #[command(
        next_help_heading = "Verification",
        about = "Check sortedness and permutation",
        long_about = "Run the sortedness oracle on a sequence and, with --against, the\n\
                      permutation oracle. Exits with status 1 if a check fails.",
        after_help = "EXAMPLES:\n    # Is this sorted?\n    selsort check 1,1,3,4,5\n\n    # Is it a sorted permutation of the input?\n    selsort check 1,1,3 --against 3,1,4,1,5"
    )]
    Check(cmd::check::CheckArgs),

    #[command(
        next_help_heading = "Verification",
        about = "Run seeded verification campaigns"
    )]
    Campaign(cmd::campaign::CampaignArgs),

    #[command(
        next_help_heading = "Maintenance",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    selsort completions bash"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_env("SELSORT_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if quiet {
            "error"
        } else if verbose || env::var("DEBUG").is_ok() {
            "selsort=debug,info"
        } else {
            "selsort=info,warn"
        })
    });

    let format = env::var("SELSORT_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();
    debug!(?output, "resolved output mode");

    match cli.command {
        Commands::Sort(ref args) => cmd::sort::run_sort(args, output),
        Commands::Select(ref args) => cmd::select::run_select(args, output),
        Commands::Check(ref args) => cmd::check::run_check(args, output),
        Commands::Campaign(ref args) => cmd::campaign::run_campaign(args, output),
        Commands::Completions(ref args) => {
            cmd::completions::run_completions(args.shell, &mut Cli::command())
        }
    }
}
