use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "inspector")]
#[command(about = "Windshield Inspector demo server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Server port
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// AWS region hosting the Bedrock endpoint
        #[arg(long, default_value = "us-west-2")]
        region: String,

        /// Bedrock model identifier
        #[arg(long, default_value = "anthropic.claude-3-5-sonnet-20240620-v1:0")]
        model_id: String,

        /// Custom Bedrock endpoint URL (e.g., a VPC endpoint)
        #[arg(long)]
        endpoint_url: Option<String>,
    },
}
