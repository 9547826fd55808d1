use std::error::Error;

use crate::record::{Attribute, AugmentId, ChampionId};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum AdvisorError {
    #[display("augment {id} is missing attribute '{attribute}'")]
    MissingAttribute { id: AugmentId, attribute: Attribute },
    #[display("augment {id} has non-numeric '{attribute}' value: {value}")]
    NonNumericAttribute {
        id: AugmentId,
        attribute: Attribute,
        value: String,
    },
    #[display(
        "unsupported normalization strategy '{name}' (expected min-max, robust-min-max or z-score)"
    )]
    UnsupportedStrategy { name: String },
    #[display("augment id {id} is not in the reference table")]
    UnknownAugmentId { id: AugmentId },
    #[display("augment name '{name}' is not in the reference table")]
    UnknownAugmentName { name: String },
    #[display("champion name '{name}' is not in the champion table")]
    UnknownChampionName { name: String },
    #[display("augment '{name}' ({id}) has no ranked statistics for this champion")]
    UnrankedAugment { name: String, id: AugmentId },
    #[display("augment id {id} appears more than once in the statistics")]
    DuplicateAugmentId { id: AugmentId },
    #[display("empty population: {what}")]
    EmptyPopulation { what: &'static str },
    #[display("failed to load augment statistics for champion {champion}")]
    Source {
        champion: ChampionId,
        source: SourceError,
    },
}

/// Error reported by an [`AugmentStatSource`](crate::source::AugmentStatSource).
#[derive(Debug, derive_more::Display)]
#[display("{_0}")]
pub struct SourceError(Box<dyn Error + Send + Sync>);

impl SourceError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self(error.into())
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}
