//! autocil CLI entry point.
//!
//! This binary provides the `autocil` command for launching project-aware
//! tmux sessions through tmuxp.

use autocil::cli::Cli;
use autocil::error::{Result, exit_codes};
use autocil::{AutocilError, loader, runner, session, target, tmux};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
    std::process::exit(exit_codes::SUCCESS);
}

/// Log to stderr. `AUTOCIL_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("AUTOCIL_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let attach = cli.attach();
    if attach && tmux::in_tmux() {
        return Err(AutocilError::InsideTmux);
    }
    if !cli.dry_run {
        runner::ensure_available()?;
    }

    let home = dirs::home_dir().ok_or(AutocilError::NoHomeDir)?;
    let config = loader::load_config(&loader::default_config_path(&home), &home);
    let cwd = std::env::current_dir()?;

    let targets = target::resolve_all(&cli.targets, &cwd, &home, &config)?;
    let launches = session::plan(&targets, cli.name.as_deref(), attach)?;

    for launch in &launches {
        if cli.dry_run {
            println!("# {}", launch.session_name);
            print!("{}", session::preview(launch)?);
        } else {
            session::launch(launch)?;
        }
    }

    Ok(())
}
