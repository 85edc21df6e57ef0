//! `maude` binary entry point.

use clap::Parser;
use cli::commands::Cli;

fn main() {
    // Load .env early; ignore if missing.
    dotenvy::dotenv().ok();

    let parsed = Cli::parse();
    cli::init_tracing(parsed.verbose);

    if let Err(err) = cli::run(parsed) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
