use clap::Parser;
use porcelain::commands::*;
use porcelain::core::{config::Format, print_error};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "porcelain2json")]
#[command(about = "Decode git status porcelain output and print it as JSON")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input format
    #[arg(short, long, value_enum, default_value_t = Format::V2)]
    format: Format,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// File with porcelain output (stdin if omitted)
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag; RUST_LOG still wins
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    if let Err(e) = execute_convert(cli.format, cli.file.as_deref(), cli.compact) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
