use anyhow::Context;
use colored::Colorize;

use tally_server::{LedgerServer, ServerConfig};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args),
    }
}

/// Build the effective configuration: file (or defaults), then flag overrides.
pub fn resolve_config(source: &ConfigSource) -> anyhow::Result<ServerConfig> {
    let mut config = match &source.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    if let Some(bind) = source.bind {
        config.bind_addr = bind;
    }
    if !source.seeds.is_empty() {
        config.seed = source.seeds.iter().cloned().collect();
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.source)?;
    println!(
        "{} Tally ledger on {} ({} seeded accounts)",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.seed.len().to_string().cyan(),
    );
    for (name, balance) in &config.seed {
        tracing::debug!(account = %name, balance, "seeding account");
    }

    LedgerServer::new(config)
        .serve()
        .await
        .context("ledger server failed")
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.source)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
