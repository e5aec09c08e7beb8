use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use version_gen::{Config, SystemRunner, cli::Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    cli.apply(&mut config);

    let runner = SystemRunner::new(config.work_dir.clone());
    cli.execute(&config, &runner, &mut std::io::stdout().lock())
}
