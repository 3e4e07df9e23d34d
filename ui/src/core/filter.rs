//! Filter criteria and the predicate that decides whether a play is included.

use std::{fmt, str::FromStr};

use thiserror::Error;

use super::play::PlayRecord;

/// Intended pass-length bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceBucket {
    /// 1 to 10 yards inclusive.
    Short,
    /// Over 10, up to and including 20 yards.
    Medium,
    /// Over 20 yards.
    Deep,
}

impl DistanceBucket {
    pub const ALL: [DistanceBucket; 3] = [Self::Short, Self::Medium, Self::Deep];

    pub fn contains(self, length: f64) -> bool {
        match self {
            Self::Short => (1.0..=10.0).contains(&length),
            Self::Medium => length > 10.0 && length <= 20.0,
            Self::Deep => length > 20.0,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Deep => "deep",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "Short (1-10 yds)",
            Self::Medium => "Medium (11-20 yds)",
            Self::Deep => "Deep (20+ yds)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized distance `{0}`")]
pub struct UnknownDistance(pub String);

impl FromStr for DistanceBucket {
    type Err = UnknownDistance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "deep" => Ok(Self::Deep),
            other => Err(UnknownDistance(other.to_string())),
        }
    }
}

impl fmt::Display for DistanceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Structured view of the filter controls. `None` means "match all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub coverage: Option<String>,
    pub down: Option<u8>,
    pub distance: Option<DistanceBucket>,
    pub formation: Option<String>,
    pub red_zone_only: bool,
    pub play_action_only: bool,
}

impl FilterCriteria {
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }
}

/// Whether `play` satisfies every clause of `criteria`.
pub fn matches(play: &PlayRecord, criteria: &FilterCriteria) -> bool {
    if let Some(coverage) = &criteria.coverage {
        if play.coverage_type != *coverage {
            return false;
        }
    }
    if let Some(down) = criteria.down {
        if play.down != down {
            return false;
        }
    }
    if let Some(formation) = &criteria.formation {
        if play.offense_formation != *formation {
            return false;
        }
    }
    if criteria.red_zone_only && !play.is_red_zone {
        return false;
    }
    if criteria.play_action_only && !play.play_action {
        return false;
    }

    match criteria.distance {
        None => true,
        Some(bucket) => play
            .pass_length
            .map(|length| bucket.contains(length))
            .unwrap_or(false),
    }
}

/// Every matching play, in dataset order.
pub fn filter<'a>(plays: &'a [PlayRecord], criteria: &FilterCriteria) -> Vec<&'a PlayRecord> {
    plays.iter().filter(|play| matches(play, criteria)).collect()
}
