//! Command Line Interface for the oracle price reader.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use oracle_domain::entities::PairId;
use oracle_domain::math::fixed_point::{format_str, parse_units};
use oracle_domain::value_objects::DecimalCount;
use oracle_protocols::{JsonRpcProvider, OracleConfig, PriceReader, SValueFeed, parse_address};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oracle-cli")]
#[command(about = "Read and format on-chain oracle price feeds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the current price of a feed from the oracle contract
    Price {
        /// Pair index of the feed
        #[arg(short, long)]
        pair_id: u64,

        /// JSON-RPC endpoint (overrides ORACLE_RPC_URL)
        #[arg(long)]
        rpc_url: Option<String>,

        /// Oracle consumer contract address (overrides ORACLE_CONTRACT_ADDRESS)
        #[arg(long)]
        contract: Option<String>,

        /// Also print the value as a (lossy) floating-point number
        #[arg(long)]
        approximate: bool,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// Format a raw scaled integer with a decimal count
    Format {
        /// Raw integer digits
        #[arg(short, long)]
        raw: String,

        /// Number of fractional digits
        #[arg(short, long, allow_negative_numbers = true)]
        decimals: i64,

        /// Also print the value as a (lossy) floating-point number
        #[arg(long)]
        approximate: bool,
    },
    /// Scale a decimal value back to its raw integer
    Parse {
        /// Decimal value, e.g. 12.3456
        #[arg(short, long)]
        value: String,

        /// Number of fractional digits
        #[arg(short, long)]
        decimals: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Price {
            pair_id,
            rpc_url,
            contract,
            approximate,
            json,
        } => {
            let mut config = OracleConfig::from_env().context("loading ORACLE_* configuration")?;
            if let Some(url) = rpc_url {
                config.rpc_url = url.clone();
            }
            if let Some(address) = contract {
                config.contract_address = Some(parse_address(address)?);
            }
            let address = config.require_contract()?;
            debug!(?config, "Resolved configuration");

            let provider = JsonRpcProvider::from_config(&config)?;
            let reader = PriceReader::new(SValueFeed::new(provider, address));

            let session = reader
                .connect()
                .await
                .with_context(|| format!("connecting to {}", config.rpc_url))?;
            println!("📡 Connected to chain {} via {}", session.chain_id, config.rpc_url);

            let quote = reader
                .quote(PairId(*pair_id))
                .await
                .with_context(|| format!("reading price for pair {pair_id}"))?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!("Price: ${}", quote.value);
                if *approximate {
                    println!("≈ {}", quote.value.to_approximate_number());
                }
            }
        }
        Commands::Format {
            raw,
            decimals,
            approximate,
        } => {
            let value = format_str(raw, *decimals)?;
            println!("{value}");
            if *approximate {
                println!("≈ {}", value.to_approximate_number());
            }
        }
        Commands::Parse { value, decimals } => {
            let raw = parse_units(value, DecimalCount::try_from(*decimals)?)?;
            println!("{raw}");
        }
    }

    Ok(())
}
