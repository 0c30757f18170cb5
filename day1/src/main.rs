use std::path::PathBuf;

use clap::Parser;
use day1::{parse, totals};
use util::{init_logging, InputSource, Verbosity};

/// Prints the largest calorie total carried by one elf, then the combined
/// total of the top three elves.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Puzzle input; standard input is read when omitted or `-`
    input: Option<PathBuf>,

    /// Trace the parsed groups on stderr
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    let input = InputSource::from_arg(cli.input).read_to_string()?;
    let groups = parse(&input)?;
    let totals = totals(&groups)?;

    println!("{totals}");

    Ok(())
}
