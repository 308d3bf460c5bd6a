// ABOUTME: Riding score, condition tiers, and per-factor penalty types
// ABOUTME: Maps a 0-100 confidence into Good, Moderate, or Unsafe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::riding_constants::confidence_tiers::{GOOD_MIN_CONFIDENCE, MODERATE_MIN_CONFIDENCE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical riding condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RidingCondition {
    /// Confidence in `[80, 100]`
    Good,
    /// Confidence in `[50, 80)`
    Moderate,
    /// Confidence in `[0, 50)`
    Unsafe,
}

impl RidingCondition {
    /// Classify a confidence value
    #[must_use]
    pub const fn from_confidence(confidence: u8) -> Self {
        if confidence >= GOOD_MIN_CONFIDENCE {
            Self::Good
        } else if confidence >= MODERATE_MIN_CONFIDENCE {
            Self::Moderate
        } else {
            Self::Unsafe
        }
    }

    /// Short display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good riding conditions",
            Self::Moderate => "Ride with caution",
            Self::Unsafe => "Unsafe for riding",
        }
    }
}

impl fmt::Display for RidingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Moderate => write!(f, "moderate"),
            Self::Unsafe => write!(f, "unsafe"),
        }
    }
}

/// Confidence score and its condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RidingScore {
    /// Riding confidence in `[0, 100]`
    pub confidence: u8,
    /// Condition derived from `confidence`
    pub condition: RidingCondition,
}

impl RidingScore {
    /// Build a score, deriving the condition from the confidence
    #[must_use]
    pub const fn from_confidence(confidence: u8) -> Self {
        Self {
            confidence,
            condition: RidingCondition::from_confidence(confidence),
        }
    }
}

/// Weather factor that can lower the confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    /// Air temperature beyond the extreme limits
    ExtremeTemperature,
    /// Air temperature outside the comfort band but within the extremes
    MildTemperature,
    /// Wind above the strong threshold
    StrongWind,
    /// Wind above the moderate threshold
    ModerateWind,
    /// Any chance of precipitation
    Precipitation,
    /// Visibility below the threshold
    PoorVisibility,
    /// Visibility not reported
    UnknownVisibility,
}

/// Points one factor removed from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePenalty {
    /// Which factor fired
    pub factor: RiskFactor,
    /// Points deducted
    pub points: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RidingCondition::from_confidence(100), RidingCondition::Good);
        assert_eq!(RidingCondition::from_confidence(80), RidingCondition::Good);
        assert_eq!(RidingCondition::from_confidence(79), RidingCondition::Moderate);
        assert_eq!(RidingCondition::from_confidence(50), RidingCondition::Moderate);
        assert_eq!(RidingCondition::from_confidence(49), RidingCondition::Unsafe);
        assert_eq!(RidingCondition::from_confidence(0), RidingCondition::Unsafe);
    }

    #[test]
    fn test_condition_serializes_lowercase() {
        let json = serde_json::to_string(&RidingCondition::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
    }
}
