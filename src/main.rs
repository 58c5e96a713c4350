use anyhow::Result;
use clap::Parser;
use colored::*;
use std::io;

use student_results::{logging, Session, SessionSettings};

#[derive(Parser)]
#[command(name = "results")]
#[command(author = "Student Results Contributors")]
#[command(version = "0.1.0")]
#[command(
    about = "Student Result Management System - record marks and look up results",
    long_about = None
)]
struct Cli {
    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = SessionSettings::from_flags(cli.verbose, cli.no_color);

    logging::init_logging(settings.verbose)?;

    if settings.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }
    if !settings.color {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock(), &settings);
    session.run()?;

    Ok(())
}
