use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use mayhem_advisor::{
    champion::ChampionSelector, record::ChampionId, reference::AugmentCatalog,
    session::AdvisorSession,
};
use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    data::{self, JsonStatDirectory},
};

use self::{lookup::LookupArg, rank::RankArg, suggest::SuggestArg};

mod lookup;
mod rank;
mod suggest;

const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Log debug output (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Suggest which of the offered augments to pick
    Suggest(#[clap(flatten)] SuggestArg),
    /// Show augment rankings per tier
    Rank(#[clap(flatten)] RankArg),
    /// Show the ranking of a single augment
    Lookup(#[clap(flatten)] LookupArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);

    let config = AppConfig::load_from(&args.config)?;
    match &args.mode {
        Mode::Suggest(arg) => suggest::run(&config, arg)?,
        Mode::Rank(arg) => rank::run(&config, arg)?,
        Mode::Lookup(arg) => lookup::run(&config, arg)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

type Session<'a> = AdvisorSession<&'a AugmentCatalog, JsonStatDirectory>;

fn open_session<'a>(config: &AppConfig, catalog: &'a AugmentCatalog) -> Session<'a> {
    let source = JsonStatDirectory::new(config.data.augment_stats_path());
    AdvisorSession::new(catalog, source, config.scoring)
}

/// Turns a `--champion` argument into the id statistics are keyed by.
///
/// Names are looked up in the champion table; ids are used as given.
fn resolve_champion(
    config: &AppConfig,
    selector: &ChampionSelector,
) -> anyhow::Result<ChampionId> {
    match selector {
        ChampionSelector::Id(id) => Ok(*id),
        ChampionSelector::Name(name) => {
            let champions = data::load_champions(config.data.champion_path())?;
            let id = champions.resolve_name(name)?;
            tracing::debug!(%name, %id, "resolved champion");
            Ok(id)
        }
    }
}
