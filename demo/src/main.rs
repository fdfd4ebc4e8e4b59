use std::io;
use std::path::PathBuf;

use clap::Parser;
use dheap_demo::{input, report};

#[derive(Parser)]
#[command(
    name = "dheap-demo",
    about = "Load integers into a d-ary max-heap, print it, then drain it",
    version
)]
struct Cli {
    /// File with one integer per line
    #[arg(long, default_value = "integers.txt")]
    input: PathBuf,

    /// Branching factor; asked for interactively when omitted
    #[arg(short = 'd', long = "branching-factor", value_parser = parse_branching_factor)]
    branching_factor: Option<usize>,
}

fn parse_branching_factor(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(d) if d >= 2 => Ok(d),
        Ok(d) => Err(format!("branching factor must be at least 2, got {d}")),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let d = match cli.branching_factor {
        Some(d) => d,
        None => input::prompt_branching_factor(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let keys = input::read_integers_or_empty(&cli.input);

    report::run(&keys, d, &mut io::stdout().lock())
}
