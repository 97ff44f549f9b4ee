//! CLI entry point for generating a tile board and flood-selecting on it

use clap::Parser;
use tileboard::io::cli::{Cli, Outcome, Session};
use tileboard::io::logging;

// Allow print for the rendered board, which is the tool's output
#[allow(clippy::print_stdout)]
fn print_outcome(outcome: &Outcome) {
    print!("{}", outcome.map);
    println!("{}", outcome.summary);
}

fn main() -> tileboard::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    let mut session = Session::new(cli);
    let outcome = session.run()?;
    print_outcome(&outcome);
    Ok(())
}
