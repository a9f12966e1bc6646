// Search preferences - optional score thresholds submitted to search
//
// Parsing is lenient: a field that is missing, null, or not a number is
// treated as absent. Nothing in a preferences payload is ever rejected.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::NeighborhoodRecord;

/// Threshold configuration for `QueryService::search`.
///
/// Only `min_walkability`, `min_safety` and `max_cost` filter results. The
/// remaining five are part of the wire shape the UI sends but have no effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPreferences {
    #[serde(
        default,
        deserialize_with = "lenient_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_walkability: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_safety: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_cost: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_nightlife: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_family: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_transit: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_green: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_diversity: Option<f64>,
}

impl SearchPreferences {
    /// True when a record passes every honored threshold that is present
    pub fn admits(&self, record: &NeighborhoodRecord) -> bool {
        let at_least = |min: Option<f64>, score: u8| min.map_or(true, |m| f64::from(score) >= m);
        let at_most = |max: Option<f64>, score: u8| max.map_or(true, |m| f64::from(score) <= m);

        at_least(self.min_walkability, record.walkability_score)
            && at_least(self.min_safety, record.safety_score)
            && at_most(self.max_cost, record.cost_score)
    }

    /// True when no honored threshold is set
    pub fn is_unconstrained(&self) -> bool {
        self.min_walkability.is_none() && self.min_safety.is_none() && self.max_cost.is_none()
    }

    /// Wire names of the fields that were supplied but do not filter
    pub fn unhonored_fields(&self) -> Vec<&'static str> {
        [
            ("minNightlife", self.min_nightlife),
            ("minFamily", self.min_family),
            ("minTransit", self.min_transit),
            ("minGreen", self.min_green),
            ("minDiversity", self.min_diversity),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Body of `POST /api/neighborhoods/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, deserialize_with = "lenient_preferences")]
    pub preferences: SearchPreferences,
}

impl SearchRequest {
    /// Parse a raw request body. Empty or malformed bodies mean "no preferences".
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

// ============================================================================
// LENIENT PARSING
// ============================================================================

fn threshold_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number.filter(|n| n.is_finite())
}

fn lenient_threshold<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(threshold_from_value))
}

fn lenient_preferences<'de, D>(deserializer: D) -> Result<SearchPreferences, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(SearchPreferences::default());
    }

    Ok(serde_json::from_value(value).unwrap_or_default())
}

// ============================================================================
// TESTS
// ============================================================================
