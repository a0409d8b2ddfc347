//! # paylink
//!
//! Prints payment redirect links for an order.
//!
//! ## Usage
//!
//! ```bash
//! # Links for every provider, conventional hashes
//! paylink --id 123 --amount 12000
//!
//! # One provider, forced hash, JSON output
//! paylink --provider provider_c --hash sha256 --json
//!
//! # Verbose logging (stderr)
//! RUST_LOG=debug paylink
//! ```

use clap::Parser;
use paylink_core::{HashAlgorithm, LinkRegistry, Order};
use paylink_providers::{default_registry, registry_with_algorithm};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "paylink", version, about = "Generate payment provider redirect links")]
struct Cli {
    /// Order identifier
    #[arg(long, default_value_t = 123)]
    id: u64,

    /// Order amount
    #[arg(long, default_value_t = 12000)]
    amount: u64,

    /// Only print the link for this provider
    #[arg(long)]
    provider: Option<String>,

    /// Hash every provider with this algorithm (md5, sha1, sha256)
    #[arg(long = "hash")]
    algorithm: Option<HashAlgorithm>,

    /// Print a JSON array instead of one URL per line
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct LinkOutput {
    provider: String,
    url: String,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries only links
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let links = generate(&cli)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&links)?);
    } else {
        for link in &links {
            println!("{}", link.url);
        }
    }

    Ok(())
}

fn generate(cli: &Cli) -> anyhow::Result<Vec<LinkOutput>> {
    let registry: LinkRegistry = match cli.algorithm {
        Some(algorithm) => registry_with_algorithm(algorithm),
        None => default_registry(),
    };
    let order = Order::new(cli.id, cli.amount);

    info!(
        order_id = order.id(),
        providers = ?registry.providers(),
        "Generating payment links"
    );

    let pairs = match &cli.provider {
        Some(provider) => vec![(provider.clone(), registry.build_link(provider, &order)?)],
        None => registry.build_all(&order)?,
    };

    Ok(pairs
        .into_iter()
        .map(|(provider, url)| LinkOutput { provider, url })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["paylink"]);

        assert_eq!(cli.id, 123);
        assert_eq!(cli.amount, 12000);
        assert!(cli.provider.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_generate_single_provider() {
        let cli = Cli::parse_from(["paylink", "--provider", "provider_b"]);
        let links = generate(&cli).unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "order.providerB.example/pay?hash=fhdYYl4cQ7LpamJKByvDYA==");
    }

    #[test]
    fn test_generate_unknown_provider() {
        let cli = Cli::parse_from(["paylink", "--provider", "provider_z"]);

        assert!(generate(&cli).is_err());
    }

    #[test]
    fn test_hash_flag_parses() {
        let cli = Cli::parse_from(["paylink", "--hash", "SHA-1"]);

        assert_eq!(cli.algorithm, Some(HashAlgorithm::Sha1));
        assert!(Cli::try_parse_from(["paylink", "--hash", "crc32"]).is_err());
    }
}
