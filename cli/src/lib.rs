//! Command line front end for MAUDE device event searches.

pub mod commands;
pub mod render;
pub mod session;
pub mod shell;

use backend::config::ProviderConfig;
use tracing_subscriber::EnvFilter;

use crate::{
    commands::{Cli, Command},
    session::Session,
    shell::run_shell,
};

pub fn init_tracing(verbose: bool) {
    let default_directives = if verbose { "warn,backend=debug,cli=debug,maude=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ProviderConfig::from_env();
    tracing::debug!("provider config: {:?}", config);
    let mut session = Session::new(config)?;

    let view = match cli.command {
        Command::Search { search, view } => {
            let request = search.to_request()?;
            eprint!("{}", session.search(request)?);
            view
        }
        Command::Top { kind, view } => {
            eprint!("{}", session.search(kind.into())?);
            view
        }
        Command::Load { path, view } => {
            eprint!("{}", session.load(&path)?);
            view
        }
        Command::Shell => {
            let stdin = std::io::stdin();
            return run_shell(&mut session, stdin.lock(), std::io::stdout(), console::user_attended());
        }
    };
    print!("{}", session.show(&view)?);
    Ok(())
}
