use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::RateRow;

/// Payload returned to callers; built fresh on every fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesEnvelope {
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub rates: Vec<RateRow>,
}
