//! Augment ranking and draft suggestions from scraped per-champion statistics.
//!
//! Given one champion's augment statistics and a reference table of augment
//! names and tiers, this crate ranks every augment within its tier and turns
//! the ranks into suggestions for the augments offered in a draft.
//!
//! # Pipeline
//!
//! ```text
//! AugmentStatSource ──load──▶ [AugmentStat]
//!                                 │  filter no-data records
//!                                 │  resolve tier (AugmentReference)
//!                                 ▼
//!                     TierGroups (per tier: normalize → weighted sum → rank)
//!                                 │
//!                                 ▼
//!                     AugmentAdvisor ──suggest(names)──▶ [Suggestion]
//! ```
//!
//! - [`normalize`] - Min-max, robust min-max and z-score rescaling of one
//!   attribute across a population
//! - [`score`] - Weighted combination of normalized performance and popularity
//! - [`tier_group`] - Grouping by tier and ranking within each group
//! - [`recommend`] - Threshold rules classifying draft candidates
//! - [`advisor`] - Per-champion entry point tying the steps together
//! - [`session`] - Lazily built advisors cached by champion
//!
//! Collaborators are injected through traits: [`reference::AugmentReference`]
//! for the name/tier table and [`source::AugmentStatSource`] for statistics.
//! [`champion::ChampionCatalog`] maps champion names to the ids statistics are
//! keyed by.
//!
//! # Example
//!
//! ```
//! use mayhem_advisor::{
//!     advisor::AugmentAdvisor,
//!     recommend::SelectThresholds,
//!     record::{AugmentInfo, AugmentStat, AugmentTier},
//!     reference::AugmentCatalog,
//!     tier_group::ScoringPolicy,
//! };
//!
//! let catalog = AugmentCatalog::new([
//!     AugmentInfo::new(1, "Red Envelopes", AugmentTier::Gold),
//!     AugmentInfo::new(2, "Tank Engine", AugmentTier::Gold),
//! ]);
//! let stats = vec![AugmentStat::new(1, 49.0, 30.0), AugmentStat::new(2, 54.0, 80.0)];
//! let advisor = AugmentAdvisor::build(&catalog, stats, &ScoringPolicy::default()).unwrap();
//!
//! let lines = advisor
//!     .recommend(&["Red Envelopes", "Tank Engine"], &SelectThresholds::default())
//!     .unwrap();
//! assert_eq!(lines[0], "pick now: Tank Engine, nothing else matters, 1/2");
//! ```

pub use self::error::{AdvisorError, SourceError};

pub mod advisor;
pub mod champion;
mod error;
pub mod normalize;
pub mod recommend;
pub mod record;
pub mod reference;
pub mod score;
pub mod session;
pub mod source;
pub mod tier_group;
