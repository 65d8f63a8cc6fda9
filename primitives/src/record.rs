//! The model hash record stored once per aggregation round.

use serde::{Deserialize, Serialize};

use crate::types::{round_key, RoundNum, Timestamp};

/// One aggregation round's result hash as stored in world state.
///
/// Field names on the wire are camelCase (`roundNum`, `modelHash`,
/// `aggregatedBy`, `timestamp`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHashRecord {
    #[serde(rename = "roundNum")]
    pub round_num: RoundNum,
    #[serde(rename = "modelHash")]
    pub model_hash: String,
    /// Producer identifier, e.g. `Coordinator-1`.
    #[serde(rename = "aggregatedBy")]
    pub aggregated_by: String,
    /// Unix seconds, assigned when the record was written.
    pub timestamp: Timestamp,
}

impl ModelHashRecord {
    pub fn new(
        round_num: RoundNum,
        model_hash: impl Into<String>,
        aggregated_by: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            round_num,
            model_hash: model_hash.into(),
            aggregated_by: aggregated_by.into(),
            timestamp,
        }
    }

    /// World-state key this record lives under.
    pub fn key(&self) -> String {
        round_key(self.round_num)
    }
}
