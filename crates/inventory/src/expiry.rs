//! Expiry-based urgency classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Urgency tier rendered alongside each item.
///
/// A rendering annotation, not a sort key: the collection stays in
/// insertion order regardless of tier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    Critical,
    Warning,
    Safe,
}

/// Classify an expiry date against a reference instant.
///
/// Total over its inputs: an absent expiry counts as zero days remaining
/// and classifies as `Critical`. Callers must treat that as the explicit
/// policy for date-less items, not as a default masking missing data.
pub fn classify(expiry_date: Option<DateTime<Utc>>, reference_now: DateTime<Utc>) -> UrgencyTier {
    let days_remaining = expiry_date
        .map(|expiry| (expiry - reference_now).num_days())
        .unwrap_or(0);

    if days_remaining < 30 {
        UrgencyTier::Critical
    } else if days_remaining < 90 {
        UrgencyTier::Warning
    } else {
        UrgencyTier::Safe
    }
}
