//! SortLab CLI: run the classic sorting algorithms from the command line.

use std::path::PathBuf;

use clap::{Parser as ClapParser, Subcommand};
use sortlab_cli::colors::{green, red};
use sortlab_cli::commands::{self, SortArgs};
use sortlab_cli::config::SortlabConfig;
use sortlab_cli::error::{CliError, ErrorChain};
use sortlab_cli::logging;
use sortlab_core::Algorithm;
use tracing::warn;

#[derive(ClapParser)]
#[command(
    name = "sortlab",
    version,
    about = "Bubble, insertion, selection, merge and radix sort",
    help_template = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}

Examples:
  sortlab sort 5 3 8 1                 Sort with the configured default
  sortlab sort -a radix -i nums.txt    Radix sort numbers from a file
  echo 9,1,5 | sortlab sort --json     Read stdin, print JSON
  sortlab digits 9805 --position 2     Inspect a decimal digit
"
)]
struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Use this config file instead of searching for sortlab.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort integers from arguments, a file, or stdin
    Sort {
        /// Numbers to sort (commas or spaces); reads --input or stdin if empty
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<String>,

        /// bubble | insertion | selection | merge | radix
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,

        /// Read numbers from this file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Verify the output is sorted and a permutation of the input
        #[arg(long)]
        check: bool,
    },
    /// List the algorithms and their properties
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show the decimal digits radix sort sees for a number
    Digits {
        #[arg(allow_negative_numbers = true)]
        number: i64,

        /// Zero-based position from the least-significant digit
        #[arg(short, long)]
        position: Option<u32>,

        #[arg(long)]
        json: bool,
    },
    /// Create a sortlab.toml config file in the current directory
    Init,
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    Algorithm::from_name(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => SortlabConfig::load_from(path).unwrap_or_else(|e| fail(&e, !cli.no_color)),
        None => SortlabConfig::load(),
    };
    let color = config.output.color && !cli.no_color;

    let result = match cli.command {
        Commands::Sort {
            numbers,
            algorithm,
            input,
            json,
            check,
        } => {
            let args = SortArgs {
                numbers,
                input,
                algorithm,
                json,
                check,
            };
            commands::cmd_sort(&args, &config, color)
        }
        Commands::List { json } => commands::cmd_list(json, &config, color),
        Commands::Digits {
            number,
            position,
            json,
        } => {
            if number < 0 {
                warn!(number, "negative input: digits are taken from the magnitude");
            }
            commands::cmd_digits(number, position, json, &config)
        }
        Commands::Init => cmd_init(color),
    };

    match result {
        Ok(out) => println!("{}", out),
        Err(e) => fail(&e, color),
    }
}

fn cmd_init(color: bool) -> Result<String, CliError> {
    let cwd = std::env::current_dir().map_err(CliError::CurrentDir)?;
    let path = commands::cmd_init(&cwd)?;
    Ok(format!("{} created {}", green("✓", color), path.display()))
}

fn fail(err: &CliError, color: bool) -> ! {
    eprintln!("{} {}", red("error:", color), ErrorChain::from(err));
    std::process::exit(1);
}
