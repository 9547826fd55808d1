use std::path::PathBuf;

use mayhem_advisor::{
    advisor::AugmentAdvisor,
    champion::ChampionSelector,
    record::{AugmentTier, ChampionId},
    reference::AugmentReference,
};
use mayhem_stats::{descriptive::DescriptiveStats, percentiles::Percentiles};

use crate::{
    config::AppConfig,
    data,
    schema::rank::{RankReport, RankedEntry, TierReport, WeightedSumSummary},
    util::Output,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RankArg {
    /// Champion name or id
    #[arg(long)]
    champion: ChampionSelector,
    /// Only show this tier (silver, gold or prismatic)
    #[arg(long)]
    tier: Option<AugmentTier>,
    /// Print the ranking as JSON instead of a table
    #[arg(long)]
    json: bool,
    /// Write the JSON ranking to this file instead of standard output
    #[arg(long)]
    output: Option<PathBuf>,
}

impl RankArg {
    fn writes_json(&self) -> bool {
        self.json || self.output.is_some()
    }
}

pub(crate) fn run(config: &AppConfig, arg: &RankArg) -> anyhow::Result<()> {
    let champion = super::resolve_champion(config, &arg.champion)?;
    let catalog = data::load_catalog(config.data.reference_path())?;
    let mut session = super::open_session(config, &catalog);
    let advisor = session.advisor(champion)?;

    let report = build_report(advisor, champion, arg.tier);
    if !arg.writes_json() {
        print_report(&report);
        return Ok(());
    }
    let mut output = Output::create(arg.output.as_deref())?;
    output.write_json(&report)?;
    if let Some(path) = output.path() {
        tracing::info!(path = %path.display(), "saved ranking report");
    }
    Ok(())
}

fn build_report<R>(
    advisor: &AugmentAdvisor<R>,
    champion: ChampionId,
    tier: Option<AugmentTier>,
) -> RankReport
where
    R: AugmentReference,
{
    let tiers = match tier {
        Some(tier) => vec![tier],
        None => advisor.tiers().collect(),
    };
    RankReport {
        champion,
        tiers: tiers
            .into_iter()
            .map(|tier| tier_report(advisor, tier))
            .collect(),
        excluded: advisor.excluded().to_vec(),
        skipped: advisor.skipped().to_vec(),
    }
}

fn tier_report<R>(advisor: &AugmentAdvisor<R>, tier: AugmentTier) -> TierReport
where
    R: AugmentReference,
{
    let augments = advisor.tier(tier).map(RankedEntry::from).collect::<Vec<_>>();
    let sums = augments.iter().map(|a| a.weighted_sum).collect::<Vec<_>>();
    let weighted_sum = DescriptiveStats::new(sums.iter().copied()).map(|stats| {
        let quartiles = Percentiles::new(&sums, &[25.0, 75.0]);
        WeightedSumSummary {
            min: stats.min,
            p25: quartiles.get(25.0).unwrap_or(stats.min),
            median: stats.median,
            p75: quartiles.get(75.0).unwrap_or(stats.max),
            max: stats.max,
            mean: stats.mean,
            std_dev: stats.std_dev,
        }
    });
    TierReport {
        tier,
        size: augments.len(),
        weighted_sum,
        augments,
    }
}

fn print_report(report: &RankReport) {
    println!("Augment Rankings (champion {})", report.champion);
    println!("==========================================");

    for tier in &report.tiers {
        println!();
        println!("{} ({} augments)", tier.tier, tier.size);
        if let Some(summary) = &tier.weighted_sum {
            println!(
                "  weighted sum: min {:.2}, p25 {:.2}, median {:.2}, p75 {:.2}, max {:.2}",
                summary.min, summary.p25, summary.median, summary.p75, summary.max
            );
        }
        println!(
            "  {:>5}  {:<32} {:>8} {:>8} {:>8}",
            "Rank", "Name", "Perf", "Pop", "Score"
        );
        for entry in &tier.augments {
            println!(
                "  {:>5}  {:<32} {:>8.4} {:>8.4} {:>8.2}",
                entry.rank,
                entry.name,
                entry.performance_norm,
                entry.popularity_norm,
                entry.weighted_sum
            );
        }
    }

    if !report.excluded.is_empty() {
        println!();
        println!("Excluded (no data): {}", report.excluded.len());
    }
    if !report.skipped.is_empty() {
        println!("Skipped (not in reference table): {}", report.skipped.len());
    }
}

#[cfg(test)]
mod tests {
    use mayhem_advisor::{
        record::{AugmentId, AugmentInfo, AugmentStat},
        reference::AugmentCatalog,
        tier_group::ScoringPolicy,
    };

    use super::*;
    use crate::command::CommandArgs;

    fn rank_arg(args: &[&str]) -> RankArg {
        let argv = ["mayhem", "rank"].into_iter().chain(args.iter().copied());
        let parsed = <CommandArgs as clap::Parser>::try_parse_from(argv).unwrap();
        match parsed.mode {
            crate::command::Mode::Rank(arg) => arg,
            mode => panic!("unexpected mode: {mode:?}"),
        }
    }

    #[test]
    fn test_rank_output_selection() {
        let table = rank_arg(&["--champion", "86"]);
        assert!(!table.writes_json());
        assert_eq!(table.champion, ChampionSelector::Id(ChampionId(86)));

        let stdout = rank_arg(&["--champion", "Miss Fortune", "--json"]);
        assert!(stdout.writes_json());
        assert!(stdout.output.is_none());
        assert_eq!(
            stdout.champion,
            ChampionSelector::Name("Miss Fortune".to_string())
        );

        let file = rank_arg(&["--champion", "86", "--output", "rank.json"]);
        assert!(file.writes_json());
        assert_eq!(file.output, Some(PathBuf::from("rank.json")));
    }

    fn advisor(catalog: &AugmentCatalog) -> AugmentAdvisor<&AugmentCatalog> {
        let stats = vec![
            AugmentStat::new(1, 50.0, 10.0),
            AugmentStat::new(2, 55.0, 30.0),
            AugmentStat::new(3, 170.0, 30.0),
            AugmentStat::new(11, 52.0, 20.0),
            AugmentStat::new(404, 52.0, 20.0),
        ];
        AugmentAdvisor::build(catalog, stats, &ScoringPolicy::default()).unwrap()
    }

    fn catalog() -> AugmentCatalog {
        AugmentCatalog::new([
            AugmentInfo::new(1, "Red Envelopes", AugmentTier::Silver),
            AugmentInfo::new(2, "Soul Eater", AugmentTier::Silver),
            AugmentInfo::new(3, "Ice Cold", AugmentTier::Silver),
            AugmentInfo::new(11, "Tank Engine", AugmentTier::Gold),
        ])
    }

    #[test]
    fn test_report_covers_every_ranked_tier() {
        let catalog = catalog();
        let report = build_report(&advisor(&catalog), ChampionId(86), None);

        assert_eq!(report.tiers.len(), 2);
        let silver = &report.tiers[0];
        assert_eq!(silver.tier, AugmentTier::Silver);
        assert_eq!(silver.size, 2);
        assert_eq!(silver.augments[0].name, "Soul Eater");
        assert_eq!(silver.augments[0].performance, Some(55.0));

        let summary = silver.weighted_sum.unwrap();
        assert_eq!((summary.min, summary.max), (0.0, 1.0));
        assert_eq!(summary.mean, 0.5);
        assert_eq!((summary.p25, summary.p75), (0.25, 0.75));

        assert_eq!(report.excluded, vec![AugmentId(3)]);
        assert_eq!(report.skipped, vec![AugmentId(404)]);
    }

    #[test]
    fn test_report_single_tier() {
        let catalog = catalog();
        let report = build_report(
            &advisor(&catalog),
            ChampionId(86),
            Some(AugmentTier::Prismatic),
        );
        assert_eq!(report.tiers.len(), 1);
        assert_eq!(report.tiers[0].size, 0);
        assert!(report.tiers[0].weighted_sum.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["champion"], 86);
        assert_eq!(json["tiers"][0]["tier"], "prismatic");
    }
}
