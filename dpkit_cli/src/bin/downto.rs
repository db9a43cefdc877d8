use clap::{CommandFactory, Parser};
use dpkit_core::reduce::{non_negative, reduce, Reduction};
use dpkit_core::Result;

#[derive(Parser)]
#[command(name = "downto")]
#[command(
    about = "Minimum number of -1, /2, /3 moves to bring n down to 1 or a multiple of 7",
    long_about = None
)]
struct Cli {
    /// Non-negative integer to reduce
    #[arg(allow_negative_numbers = true)]
    n: Option<i64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dpkit_core::logging::init();

    let cli = Cli::parse();

    let Some(n) = cli.n else {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    };
    let n = non_negative(n)?;

    tracing::debug!("Reducing n={}", n);
    let report = reduce(n);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_reduction(&report);
    }

    Ok(())
}

fn display_reduction(report: &Reduction) {
    println!("Naive recursion:   {} operations", report.naive);
    println!("Memoized:          {} operations", report.memoized);
    println!("Tabulated:         {} operations", report.tabulated);
    let sequence = format!("Optimal sequence:  {}", report.path_labels());
    println!("{}", sequence.trim_end());
}
