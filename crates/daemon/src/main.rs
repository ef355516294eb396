// CLI modules
mod cli;
mod config;

// Service runner (logging, HTTP server, shutdown)
mod process;

use clap::{Parser, Subcommand};
use cli::{args::Args, op::Op, Backup, Health, Restore, Serve, Version};

command_enum! {
    (Serve, Serve),
    (Health, Health),
    (Backup, Backup),
    (Restore, Restore),
    (Version, Version),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Build context - always has API client initialized
    let ctx = match cli::op::OpContext::new(args.remote, args.config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: Failed to create API client: {}", e);
            std::process::exit(1);
        }
    };

    match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
