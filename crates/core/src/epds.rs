//! EPDS (Edinburgh Postnatal Depression Scale) depression levels.
//!
//! Recommendation text is keyed by these levels. Scoring itself happens
//! upstream; this module only names the closed set of outcomes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Screening outcome, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepressionLevel {
    Low,
    Mild,
    Moderate,
    HigherRisk,
}

impl DepressionLevel {
    /// All levels in severity order.
    pub const ALL: [DepressionLevel; 4] = [
        DepressionLevel::Low,
        DepressionLevel::Mild,
        DepressionLevel::Moderate,
        DepressionLevel::HigherRisk,
    ];

    /// The value stored in `epds_recommendations.level`.
    pub fn as_str(self) -> &'static str {
        match self {
            DepressionLevel::Low => "low",
            DepressionLevel::Mild => "mild",
            DepressionLevel::Moderate => "moderate",
            DepressionLevel::HigherRisk => "higher_risk",
        }
    }
}

impl fmt::Display for DepressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DepressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DepressionLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = DepressionLevel::ALL.iter().map(|l| l.as_str()).collect();
                format!(
                    "Unknown depression level '{s}'. Must be one of: {}",
                    valid.join(", ")
                )
            })
    }
}
