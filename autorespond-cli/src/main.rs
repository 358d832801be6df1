//! autorespond CLI: run the Telegram bot, or show/set/remove triggers offline. Config from env and optional CLI args.

use anyhow::Result;
use autorespond::AutorespondCommand;
use autorespond_cli::{load_config, run_bot, run_offline, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Run { token } => {
            let config = load_config(token, cli.triggers_path)?;
            return run_bot(config).await;
        }
        Commands::Show => AutorespondCommand::Show,
        Commands::Set { trigger, response } => AutorespondCommand::Set { trigger, response },
        Commands::Remove { trigger } => AutorespondCommand::Remove { trigger },
    };

    // Offline commands log to stderr only, so stdout carries just the rendered reply.
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = load_config(None, cli.triggers_path)?;
    let reply = run_offline(&config, command).await?;
    println!("{}", reply.render());

    Ok(())
}
