//! brandkit CLI - small demonstrations of branded values.
//!
//! ```text
//! brandkit convert <amount> [EUR]   EUR amount -> USD at the resolved rate
//! brandkit author <post-id>         resolve a post's author, branded and flat
//! ```
//!
//! Command output goes to stdout; logs go to stderr, filtered by `RUST_LOG`
//! (default `info`).

mod demo;

use std::env;
use std::io;

use anyhow::{Context, Result, bail};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use brandkit_config::{BrandkitConfig, ConfigError, ResolvedRate, resolve_exchange_rate};
use brandkit_lookup::{InMemoryDirectory, author_of_post, flat};
use brandkit_types::{
    Eur, EurAmount, PostId, RecordId, UsdAmount, convert_eur_to_usd, parse_amount,
};

const USAGE: &str = "\
usage:
  brandkit convert <amount> [EUR]   convert euros to dollars
  brandkit author <post-id>         look up a post's author";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Convert { amount: String },
    Author { post_id: u64 },
    Help,
}

impl Command {
    fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(name) = args.next() else {
            return Ok(Command::Help);
        };

        match name.as_str() {
            "convert" => {
                let rest: Vec<String> = args.collect();
                if rest.is_empty() {
                    bail!("missing amount\n{USAGE}");
                }
                Ok(Command::Convert {
                    amount: rest.join(" "),
                })
            }
            "author" => {
                let raw = args.next().with_context(|| format!("missing post id\n{USAGE}"))?;
                if let Some(extra) = args.next() {
                    bail!("unexpected argument {extra:?}\n{USAGE}");
                }
                let post_id = raw
                    .parse()
                    .with_context(|| format!("invalid post id {raw:?}"))?;
                Ok(Command::Author { post_id })
            }
            "help" | "-h" | "--help" => Ok(Command::Help),
            other => bail!("unknown command {other:?}\n{USAGE}"),
        }
    }
}

fn load_config() -> Option<BrandkitConfig> {
    config_or_defaults(BrandkitConfig::load())
}

/// A config file that cannot be read or parsed is logged and treated as absent.
fn config_or_defaults(
    loaded: Result<Option<BrandkitConfig>, ConfigError>,
) -> Option<BrandkitConfig> {
    match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using defaults: {err}");
            None
        }
    }
}

fn convert(amount: &str, resolved: ResolvedRate) -> Result<String> {
    let eur: EurAmount =
        parse_amount::<Eur>(amount).with_context(|| format!("invalid EUR amount {amount:?}"))?;
    let usd: UsdAmount = convert_eur_to_usd(eur, resolved.rate);
    Ok(format!("{eur:.2} EUR = {usd:.2} USD"))
}

async fn describe_author(dir: &InMemoryDirectory, post_id: u64) -> String {
    let branded = match author_of_post(dir, dir, PostId::from_unverified(post_id)).await {
        Ok(user) => format!("{} (user {})", user.name, user.id),
        Err(err) => format!("error: {err}"),
    };
    let flat_author = match flat::author_of_post(dir, dir, RecordId::from_unverified(post_id)).await {
        Ok(user) => format!("{} (record {})", user.name, user.id),
        Err(err) => format!("error: {err}"),
    };
    format!("post {post_id}\n  author: {branded}\n  flat lookup: {flat_author}")
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    match Command::parse(env::args().skip(1))? {
        Command::Help => println!("{USAGE}"),
        Command::Convert { amount } => {
            let config = load_config();
            let resolved = resolve_exchange_rate(config.as_ref());
            tracing::info!(
                rate = resolved.rate.value(),
                source = %resolved.source,
                "Using exchange rate"
            );
            println!("{}", convert(&amount, resolved)?);
        }
        Command::Author { post_id } => {
            let dir = demo::directory();
            println!("{}", describe_author(&dir, post_id).await);
        }
    }

    Ok(())
}
