mod keypair;

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use indicatif::ProgressBar;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signer::Signer};
use spl_minter_api::prelude::*;
use spl_minter_client::{consts::LAMPORTS_PER_TX, get_holding_account, get_mint_record, get_token_summary, program};
use keypair::{get_keypair_path, get_payer};

#[derive(Debug, Clone, PartialEq)]
pub enum Cluster {
    Localnet,
    Mainnet,
    Devnet,
    Testnet,
    Custom(String),
}

impl Cluster {
    pub fn rpc_url(&self) -> String {
        match self {
            Cluster::Localnet => "http://127.0.0.1:8899".to_string(),
            Cluster::Mainnet => "https://api.mainnet-beta.solana.com".to_string(),
            Cluster::Devnet => "https://api.devnet.solana.com".to_string(),
            Cluster::Testnet => "https://api.testnet.solana.com".to_string(),
            Cluster::Custom(url) => url.clone(),
        }
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" => Ok(Cluster::Localnet),
            "m" => Ok(Cluster::Mainnet),
            "d" => Ok(Cluster::Devnet),
            "t" => Ok(Cluster::Testnet),
            s if s.starts_with("http://") || s.starts_with("https://") => Ok(Cluster::Custom(s.to_string())),
            _ => Err(format!(
                "Invalid cluster value: '{}'. Use l, m, d, t, or a valid RPC URL (http:// or https://)",
                s
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "spl-minter")]
#[command(about = "CLI for the single-token SPL minter program")]
struct Cli {
    #[arg(long, global = true, env = "SPL_MINTER_KEYPAIR", help = "Path to Solana keypair file (default: ~/.config/solana/id.json)")]
    keypair: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = "SPL_MINTER_CLUSTER",
        default_value = "l",
        help = "Solana cluster (l = localnet, m = mainnet, d = devnet, t = testnet, or a custom RPC URL)"
    )]
    cluster: Cluster,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Creates the program mint and attaches its metadata (skipped if it already exists)
    Init {
        #[arg(long, help = "Token name (max 32 bytes)")]
        name: String,

        #[arg(long, help = "Token symbol (max 10 bytes)")]
        symbol: String,

        #[arg(long, help = "Metadata URI (max 200 bytes)")]
        uri: String,

        #[arg(long, default_value_t = DEFAULT_DECIMALS, help = "Decimal places of the token")]
        decimals: u8,
    },

    /// Mints tokens to an owner, creating their holding account if needed
    Mint {
        #[arg(long, help = "Amount in whole tokens (e.g., 10.5), or smallest units with --raw")]
        amount: String,

        #[arg(long, help = "Recipient wallet (default: the payer)")]
        owner: Option<Pubkey>,

        #[arg(long, help = "Interpret amount as smallest units")]
        raw: bool,
    },

    /// Shows the mint, its metadata and authorities
    Info {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Shows the token balance of an owner
    Balance {
        #[arg(long, help = "Owner wallet (default: the payer)")]
        owner: Option<Pubkey>,
    },

    /// Prints the derived mint, metadata and holding addresses
    Address,
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    pb
}

fn to_amount(amount: &str, raw: bool, decimals: u8) -> Result<u64> {
    let amount = amount.trim();
    let value = if raw {
        parse_base_units(amount, 0)
    } else {
        parse_base_units(amount, decimals)
    };
    value
        .filter(|v| *v > 0)
        .ok_or_else(|| anyhow!("Invalid amount {} for {} decimals", amount, decimals))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(if cli.verbose { "debug" } else { "info" })
    ).init();

    let client = RpcClient::new_with_commitment(cli.cluster.rpc_url(), CommitmentConfig::confirmed());
    log::debug!("RPC URL: {}", client.url());

    let (mint_pda, _) = find_mint_pda();

    match cli.command {
        Commands::Init { name, symbol, uri, decimals } => {
            let payer = get_payer(get_keypair_path(cli.keypair)?)?;

            if cli.cluster == Cluster::Mainnet {
                let proceed = Confirm::new()
                    .with_prompt(format!("Initialize mint {} on mainnet?", mint_pda))
                    .default(false)
                    .interact()?;
                if !proceed {
                    println!("{}", "Aborted".yellow());
                    return Ok(());
                }
            }

            let pb = spinner("Initializing mint");
            let res = program::initialize(
                &client,
                &payer,
                TokenMetadata { name, symbol, uri, decimals },
            ).await;
            pb.finish_and_clear();

            match res? {
                Some(signature) => {
                    println!("{} {}", "Mint initialized:".green().bold(), mint_pda);
                    println!("Signature: {}", signature);
                }
                None => println!("{} {}", "Mint already initialized:".yellow(), mint_pda),
            }
        }

        Commands::Mint { amount, owner, raw } => {
            let payer = get_payer(get_keypair_path(cli.keypair)?)?;
            let owner = owner.unwrap_or_else(|| payer.pubkey());

            let lamports = client.get_balance(&payer.pubkey()).await?;
            if lamports < LAMPORTS_PER_TX {
                return Err(anyhow!("Payer {} cannot cover transaction fees", payer.pubkey()));
            }

            let mint_record = get_mint_record(&client)
                .await?
                .ok_or_else(|| anyhow!("Mint {} is not initialized; run init first", mint_pda))?;
            let amount = to_amount(&amount, raw, mint_record.decimals)?;

            let pb = spinner("Minting tokens");
            let res = program::mint_tokens(&client, &payer, owner, amount).await;
            pb.finish_and_clear();
            let signature = res?;

            let balance = get_holding_account(&client, &owner)
                .await?
                .map_or(0, |h| h.amount);
            println!("{} {} to {}", "Minted".green().bold(), to_decimal(amount, mint_record.decimals), owner);
            println!("Balance: {}", to_decimal(balance, mint_record.decimals));
            println!("Signature: {}", signature);
        }

        Commands::Info { json } => {
            let summary = get_token_summary(&client).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }

            println!("{}", "Token:".bold());
            println!("  Program: {}", summary.program_id);
            println!("  Mint: {}", summary.mint);
            println!("  Metadata: {}", summary.metadata);
            println!("  Name: {}", summary.name.as_deref().unwrap_or("-"));
            println!("  Symbol: {}", summary.symbol.as_deref().unwrap_or("-"));
            println!("  URI: {}", summary.uri.as_deref().unwrap_or("-"));
            println!("  Decimals: {}", summary.decimals);
            println!("  Supply: {} ({})", summary.ui_supply, summary.supply);
            println!("  Mint Authority: {}", summary.mint_authority.as_deref().unwrap_or("none"));
            println!("  Freeze Authority: {}", summary.freeze_authority.as_deref().unwrap_or("none"));
        }

        Commands::Balance { owner } => {
            let owner = match owner {
                Some(owner) => owner,
                None => get_payer(get_keypair_path(cli.keypair)?)?.pubkey(),
            };

            let mint_record = get_mint_record(&client)
                .await?
                .ok_or_else(|| anyhow!("Mint {} is not initialized", mint_pda))?;

            // A holding account that does not exist yet has a zero balance.
            let balance = get_holding_account(&client, &owner)
                .await?
                .map_or(0, |h| h.amount);

            println!("{}: {}", owner, to_decimal(balance, mint_record.decimals));
        }

        Commands::Address => {
            let (metadata_pda, _) = find_metadata_pda(&mint_pda);
            println!("Program: {}", spl_minter_api::ID);
            println!("Mint: {}", mint_pda);
            println!("Metadata: {}", metadata_pda);

            if let Ok(payer) = get_keypair_path(cli.keypair).and_then(get_payer) {
                println!("Holding ({}): {}", payer.pubkey(), find_holding_account(&payer.pubkey(), &mint_pda));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cluster_shorthands() {
        assert_eq!("l".parse::<Cluster>(), Ok(Cluster::Localnet));
        assert_eq!("d".parse::<Cluster>(), Ok(Cluster::Devnet));
        assert_eq!(
            "https://rpc.example".parse::<Cluster>(),
            Ok(Cluster::Custom("https://rpc.example".to_string()))
        );
        assert!("x".parse::<Cluster>().is_err());
    }

    #[test]
    fn converts_amounts() {
        assert_eq!(to_amount("10", false, 9).unwrap(), 10_000_000_000);
        assert_eq!(to_amount("10.5", false, 9).unwrap(), 10_500_000_000);
        assert_eq!(to_amount("42", true, 9).unwrap(), 42);
        assert!(to_amount("0", false, 9).is_err());
        assert!(to_amount("0.0", false, 9).is_err());
        assert!(to_amount("-3", false, 9).is_err());
        assert!(to_amount("1.5", true, 9).is_err());
    }

    #[test]
    fn converts_large_amounts_exactly() {
        assert_eq!(to_amount("9007199254740993", true, 9).unwrap(), 9_007_199_254_740_993);
        assert_eq!(
            to_amount("18000000000.000000001", false, 9).unwrap(),
            18_000_000_000_000_000_001
        );
        assert!(to_amount("18446744073709551616", true, 9).is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
