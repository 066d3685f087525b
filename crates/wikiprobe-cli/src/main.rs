//! Wikiprobe CLI - Recover protocol command records from knowledge source answers.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wikiprobe_cli::commands;
use wikiprobe_cli::{config, Cli, Command, Formatter};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter = Formatter::new(cli.format, !cli.no_color);
    if let Err(e) = run(cli, &formatter) {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so stdout stays machine-readable
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli, formatter: &Formatter) -> wikiprobe_cli::Result<()> {
    match cli.command {
        Command::Extract(args) => commands::execute_extract(args, formatter),
        Command::Analyze(args) => {
            let config = config::load(cli.config.as_deref())?;
            commands::execute_analyze(args, config, formatter)
        }
    }
}
