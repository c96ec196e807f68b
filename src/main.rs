mod commands;
mod console;
mod world;

use anyhow::Result;
use clap::Parser;
use console::Terminal;
use eldoutils_core::commands::{builtin, CommandAdapter, CommandEnv, CommandTree};
use eldoutils_core::config::Settings;
use eldoutils_core::localization::Localizer;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;
use world::MemoryWorld;

/// Interactive console for the EldoUtils command router
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the config file. Missing keys are written back with defaults.
    #[arg(long, default_value = "Config.toml")]
    config: PathBuf,

    /// Issue commands as this player instead of the console.
    #[arg(long)]
    sender: Option<String>,

    /// Permissions granted to the player sender. `*` grants everything.
    #[arg(long = "permission")]
    permissions: Vec<String>,

    /// Client locale reported by the player sender.
    #[arg(long)]
    locale: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let logfile = tracing_appender::rolling::daily("./logs", "eldoutils.log");
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("ELDOUTILS_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(logfile.and(std::io::stdout))
        .with_env_filter(env_filter)
        .init();

    let settings = Settings::load(&args.config)?;
    let world = Arc::new(MemoryWorld::sample());

    let (localizer, root) = match Localizer::from_settings(&settings) {
        Ok(localizer) => (localizer, commands::eldo()),
        Err(err) => {
            error!("Failed to load locales: {:#}", err);
            (Localizer::new(settings.locale.clone()), builtin::failsave("eldo"))
        }
    };
    let env = CommandEnv::new(&settings, Arc::new(localizer), world);
    let adapter = CommandAdapter::new(CommandTree::new(root), env);

    let sender = match args.sender {
        Some(name) => Terminal::player(name, args.permissions, args.locale),
        None => Terminal::console(),
    };
    info!(
        "Ready. Commands run as {}; prefix a line with `?` to tab complete it.",
        sender.name
    );

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(partial) = line.strip_prefix('?') {
            console::complete(&adapter, &sender, partial);
        } else if !adapter.command_line(&sender, &line) {
            sender.print(&format!("Unknown command: {}", line.trim()));
        }
    }
    Ok(())
}
