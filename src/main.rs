use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use treeline::cli::args::Cli;
use treeline::cli::commands::execute_command;
use treeline::cli::output;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = execute_command(&cli) {
        output::error(&format!("{e:#}"));
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
