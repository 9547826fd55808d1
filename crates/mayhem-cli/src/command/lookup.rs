use anyhow::bail;
use mayhem_advisor::{champion::ChampionSelector, record::AugmentId};

use crate::{config::AppConfig, data};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LookupArg {
    /// Champion name or id
    #[arg(long)]
    champion: ChampionSelector,
    /// Augment id to look up
    id: AugmentId,
}

pub(crate) fn run(config: &AppConfig, arg: &LookupArg) -> anyhow::Result<()> {
    let champion = super::resolve_champion(config, &arg.champion)?;
    let catalog = data::load_catalog(config.data.reference_path())?;
    let mut session = super::open_session(config, &catalog);
    let advisor = session.advisor(champion)?;

    let Some(augment) = advisor.record_by_id(arg.id) else {
        if advisor.excluded().contains(&arg.id) {
            bail!("augment {} has no data for champion {}", arg.id, champion);
        }
        bail!("augment {} is not ranked for champion {}", arg.id, champion);
    };

    println!("{} ({})", augment.name(), augment.id());
    println!("  tier:             {}", augment.tier());
    println!("  rank:             {}/{}", augment.rank(), augment.tier_size());
    println!("  weighted sum:     {:.2}", augment.weighted_sum());
    println!("  performance norm: {:.4}", augment.score.performance_norm);
    println!("  popularity norm:  {:.4}", augment.score.popularity_norm);
    Ok(())
}
