//! scorebook - game results collection and export tool
//!
//! Usage:
//!   scorebook show <results.json> [--json]     Display result tables
//!   scorebook export <results.json> [options]  Export workbook/CSV/chart
//!   scorebook thumbs <paths...> [--out DIR]    Generate image thumbnails
//!   scorebook --help                           Show help

use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> anyhow::Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        cli::print_help();
        return Ok(());
    }

    match cli::parse_args(&args) {
        Ok(command) => cli::run(command),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            cli::print_help();
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
