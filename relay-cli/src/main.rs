//! PIX CLI
//!
//! Command-line interface for the PIX relay.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::{Map, Number, Value};

use relay_client::RelayClient;
use relay_types::CreatePixRequest;

#[derive(Parser)]
#[command(name = "pix")]
#[command(author, version, about = "PIX relay CLI client", long_about = None)]
struct Cli {
    /// Base URL of the PIX relay
    #[arg(long, env = "PIX_RELAY_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a PIX transaction
    Create {
        /// Amount in BRL, e.g. 8.90 (relay default when omitted)
        #[arg(long, value_parser = parse_amount)]
        amount: Option<Number>,
        /// Description shown by the provider
        #[arg(long)]
        description: Option<String>,
        /// Metadata as a JSON object, e.g. '{"order":"42"}'
        #[arg(long, value_parser = parse_metadata)]
        metadata: Option<Map<String, Value>>,
    },
    /// Check a transaction's status
    Check {
        /// Transaction ID returned by `create`
        id: String,
    },
    /// Check relay health
    Health,
}

fn parse_amount(s: &str) -> Result<Number> {
    serde_json::from_str(s).map_err(|_| anyhow::anyhow!("Invalid amount: {}", s))
}

fn parse_metadata(s: &str) -> Result<Map<String, Value>> {
    serde_json::from_str(s).map_err(|e| anyhow::anyhow!("Metadata must be a JSON object: {}", e))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = RelayClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ Relay is healthy");
            } else {
                println!("✗ Relay is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Create {
            amount,
            description,
            metadata,
        } => {
            let req = CreatePixRequest {
                amount: amount.map(Value::Number),
                description: description.map(Value::String),
                metadata: metadata.map(Value::Object),
            };
            let tx = client.create_pix(&req).await?;
            println!("{}", serde_json::to_string_pretty(&tx)?);
        }

        Commands::Check { id } => {
            let tx = client.check_transaction(&id).await?;
            println!("{}", serde_json::to_string_pretty(&tx)?);
        }
    }

    Ok(())
}
