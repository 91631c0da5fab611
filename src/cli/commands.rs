use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::menu::run_menu;
use crate::config::Config;
use crate::history::SqliteHistoryStore;
use crate::lookup::PokeApiClient;
use crate::notify::WebexNotifier;
use crate::pokedex::Pokedex;

#[derive(Parser)]
#[command(name = "mini-pokedex")]
#[command(version = "0.1.0")]
#[command(
    about = "Look up Pokémon, share them to a Webex room and keep a search history",
    long_about = None
)]
pub struct Cli {}

pub fn run() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = Config::from_env()?;
    let lookup = PokeApiClient::new(&config.api).context("Failed to build lookup client")?;
    let history = SqliteHistoryStore::open(&config.storage.path)
        .context("Failed to open search history")?;
    let notifier = WebexNotifier::new(&config.chat).context("Failed to build chat client")?;
    info!(db = %config.storage.path.display(), api = %config.api.base_url, "starting");

    let mut pokedex = Pokedex::new(lookup, history, notifier);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    pokedex.startup(&mut out)?;
    run_menu(&mut pokedex, &mut input, &mut out)?;

    Ok(())
}

/// Logs go to stderr so they never interleave with menu output on stdout.
/// `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
