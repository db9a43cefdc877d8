use clap::{CommandFactory, Parser};
use dpkit_core::morse::{count_decodings, Decoding, TableMode};
use dpkit_core::{Config, Result};
use std::io::{self, Read};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  morse-count \"..-  --..-.-.-...  --  -  --...-\"
  morse-count --mode=FULL \"..-  --..-.-.-...  --  -  --...-\"
  echo \"... --- ...\" | morse-count --verbose
  morse-count -- -.-- --verbose

Options are recognized anywhere on the line. Every other argument, including
a bare `--`, is part of the message.";

#[derive(Parser)]
#[command(name = "morse-count")]
#[command(
    about = "Count the ways a Morse message can be decoded into letters",
    long_about = None,
    override_usage = "morse-count [OPTIONS] [MESSAGE]...",
    after_help = EXAMPLES
)]
struct Cli {
    /// Symbol table: BASIC, BASIC_PLUS_CEDILLA, BASIC_PLUS_DIGITS or FULL
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,

    /// Print the count of every segment after the total
    #[arg(long)]
    verbose: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Split the command line into the options clap parses and the message words
///
/// Morse words start with `-` and may be a bare `--`, so clap cannot tell them
/// from options. Known options are picked out wherever they appear and
/// everything else is kept, in order, as the message.
fn split_args<I: IntoIterator<Item = String>>(args: I) -> (Vec<String>, Vec<String>) {
    let mut args = args.into_iter();
    // argv[0] stays with the options
    let mut options: Vec<String> = args.next().into_iter().collect();
    let mut message = Vec::new();

    while let Some(arg) = args.next() {
        let takes_value = arg == "--mode" || arg == "--config";
        let is_option = takes_value
            || matches!(arg.as_str(), "--verbose" | "--json" | "--help" | "-h")
            || arg.starts_with("--mode=")
            || arg.starts_with("--config=");

        if is_option {
            options.push(arg);
            if takes_value {
                options.extend(args.next());
            }
        } else {
            message.push(arg);
        }
    }

    (options, message)
}

fn main() -> Result<()> {
    dpkit_core::logging::init();

    let (options, words) = split_args(std::env::args());
    let cli = Cli::parse_from(options);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let message = if words.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input
    } else {
        words.join(" ")
    };
    let message = message.trim();

    if message.is_empty() {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    }

    // The command line wins over the config file
    let mode: TableMode = match &cli.mode {
        Some(name) => name.parse()?,
        None => config.morse.table_mode()?,
    };
    let verbose = cli.verbose || config.morse.verbose;

    let decoding = count_decodings(message, mode);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&decoding)?);
    } else {
        display_decoding(&decoding, verbose);
    }

    Ok(())
}

fn display_decoding(decoding: &Decoding, verbose: bool) {
    println!("{}", decoding.total);

    if verbose {
        for seg in &decoding.segments {
            println!("segment: {:>20} | {:>10}", seg.segment, seg.count);
        }
    }
}
