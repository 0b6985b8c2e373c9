mod cli;
mod serve;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, region, model_id, endpoint_url } => {
            serve::run_serve(port, region, model_id, endpoint_url).await
        }
    }
}
