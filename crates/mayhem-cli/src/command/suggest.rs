use mayhem_advisor::champion::ChampionSelector;

use crate::{config::AppConfig, data};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SuggestArg {
    /// Champion name or id
    #[arg(long)]
    champion: ChampionSelector,
    /// Names of the offered augments, as shown in game
    #[arg(required = true)]
    names: Vec<String>,
}

pub(crate) fn run(config: &AppConfig, arg: &SuggestArg) -> anyhow::Result<()> {
    let champion = super::resolve_champion(config, &arg.champion)?;
    let catalog = data::load_catalog(config.data.reference_path())?;
    let mut session = super::open_session(config, &catalog);
    let advisor = session.advisor(champion)?;

    for line in advisor.recommend(&arg.names, &config.suggest)? {
        println!("{line}");
    }
    Ok(())
}
