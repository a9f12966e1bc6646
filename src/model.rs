// Neighborhood record - the single entity served by the API
// Field names serialize in camelCase to match the browser client

use serde::{Deserialize, Serialize};

/// Upper bound for every score field (inclusive)
pub const MAX_SCORE: u8 = 100;

// ============================================================================
// RECORD
// ============================================================================

/// One neighborhood entry. Immutable once loaded into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodRecord {
    /// Stable lookup key (exact, case-sensitive)
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,

    // ========================================================================
    // SCORES (0-100)
    // ========================================================================
    pub match_score: u8,
    pub walkability_score: u8,
    pub safety_score: u8,
    pub nightlife_score: u8,
    pub family_score: u8,
    pub cost_score: u8,
    pub transit_score: u8,
    pub green_score: u8,
    pub diversity_score: u8,

    // ========================================================================
    // PRESENTATION
    // ========================================================================
    /// Opaque image path or URL, never validated
    pub image: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub demographics: Demographics,
    pub amenities: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// Display-oriented demographics.
///
/// Income and population are pre-formatted strings (locale-specific currency
/// grouping is baked in), so they are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub median_age: u32,
    pub median_income: String,
    pub population: String,
}

impl NeighborhoodRecord {
    /// All nine scores paired with their JSON field names
    pub fn scores(&self) -> [(&'static str, u8); 9] {
        [
            ("matchScore", self.match_score),
            ("walkabilityScore", self.walkability_score),
            ("safetyScore", self.safety_score),
            ("nightlifeScore", self.nightlife_score),
            ("familyScore", self.family_score),
            ("costScore", self.cost_score),
            ("transitScore", self.transit_score),
            ("greenScore", self.green_score),
            ("diversityScore", self.diversity_score),
        ]
    }

    /// First score outside `[0, MAX_SCORE]`, if any
    pub fn out_of_range_score(&self) -> Option<(&'static str, u8)> {
        self.scores()
            .into_iter()
            .find(|(_, value)| *value > MAX_SCORE)
    }

    /// "City, State" label used by list views
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

// ============================================================================
// SCORE BANDS
// ============================================================================

/// Colour band the results page assigns to a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 80 and above (green)
    Strong,

    /// 60 to 79 (yellow)
    Moderate,

    /// Below 60 (red)
    Weak,
}

impl ScoreBand {
    pub fn of(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Strong
        } else if score >= 60 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "strong",
            ScoreBand::Moderate => "moderate",
            ScoreBand::Weak => "weak",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
