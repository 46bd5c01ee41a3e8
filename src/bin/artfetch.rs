use artfetch::ItunesClient;
use clap::Parser;

mod commands;

use commands::{execute_command, Commands};

/// iTunes album artwork search and download tool
#[derive(Parser)]
#[command(
    name = "artfetch",
    about = "Search the iTunes catalog and download album artwork",
    long_about = None
)]
struct Cli {
    /// Show detailed debug information
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let http_client = http_client::native::NativeClient::new();
    let client = ItunesClient::new(Box::new(http_client));

    if let Err(e) = execute_command(args.command, &client).await {
        eprintln!("❌ Command failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}
