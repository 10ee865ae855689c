use clap::Parser;
use oil_bulletin::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Create cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        // Set up graceful shutdown handling
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");

            // Cancel all operations when Ctrl+C is received
            cancellation_token.cancel();
        };

        // Run the main command with cancellation support
        tokio::select! {
            result = commands::run(args, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(oil_bulletin::Error::processing_interrupted(
                    "Processing interrupted by user".to_string()
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - the summary has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Oil Bulletin - EU Weekly Oil Bulletin Price Extractor");
    println!("=====================================================");
    println!();
    println!("Extract per-country Euro-super 95 and diesel consumer prices from the");
    println!("EU Weekly Oil Bulletin spreadsheet into dated JSON reports.");
    println!();
    println!("USAGE:");
    println!("    oil-bulletin <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    fetch       Download the latest bulletin workbook and write a report");
    println!("    extract     Extract prices from a local workbook file");
    println!("    countries   Show the country code and currency registry");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Fetch the latest bulletin and write a report under ./data:");
    println!("    oil-bulletin fetch");
    println!();
    println!("    # Fetch into a custom directory, keeping the downloaded workbook:");
    println!("    oil-bulletin fetch --output /srv/reports --keep-workbook bulletin.xlsx");
    println!();
    println!("    # Extract a previously downloaded workbook to stdout:");
    println!("    oil-bulletin extract bulletin.xlsx --print");
    println!();
    println!("    # List the country registry as JSON:");
    println!("    oil-bulletin countries --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    oil-bulletin <COMMAND> --help");
}
