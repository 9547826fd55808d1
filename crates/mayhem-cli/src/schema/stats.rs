use chrono::{DateTime, Utc};
use mayhem_advisor::record::AugmentStat;
use serde::{Deserialize, Serialize};

/// One champion's scraped augment statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatFile {
    /// When the statistics were scraped (RFC 3339), if known
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
    pub data: Vec<AugmentStat>,
}
