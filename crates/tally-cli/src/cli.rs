use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Tally: in-memory account ledger over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the ledger server
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

/// Options shared by every command that resolves a configuration.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigSource {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on, overrides the file
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Starting balance as NAME=AMOUNT; repeatable, replaces the configured seed
    #[arg(long = "seed", value_parser = parse_seed)]
    pub seeds: Vec<(String, f64)>,
}

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}

fn parse_seed(s: &str) -> Result<(String, f64), String> {
    let (name, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("account name is empty".into());
    }
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|e| format!("invalid amount `{amount}`: {e}"))?;
    Ok((name.to_string(), amount))
}
