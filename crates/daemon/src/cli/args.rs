pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "grandline")]
#[command(version, about = "Serve the grandline archive API, or talk to a running one")]
pub struct Args {
    /// Base URL of a running service (used by client commands)
    #[arg(
        long,
        global = true,
        env = "GRANDLINE_REMOTE",
        default_value = "http://localhost:5328"
    )]
    pub remote: Url,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}
