//! Play records and the coercion from the loose on-disk shape.

use serde::{Deserialize, Serialize};

/// Outcome of a pass attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassResult {
    Complete,
    Incomplete,
    Interception,
}

impl PassResult {
    /// Parse the short wire code (`C`, `I`, `IN`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "C" => Some(Self::Complete),
            "I" => Some(Self::Incomplete),
            "IN" => Some(Self::Interception),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Complete => "C",
            Self::Incomplete => "I",
            Self::Interception => "IN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Complete => "Complete",
            Self::Incomplete => "Incomplete",
            Self::Interception => "Interception",
        }
    }
}

/// One passing play. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayRecord {
    pub possession_team: String,
    pub down: u8,
    pub pass_length: Option<f64>,
    pub yards_gained: f64,
    pub offense_formation: String,
    pub coverage_type: String,
    pub is_red_zone: bool,
    pub play_action: bool,
    pub pass_result: Option<PassResult>,
    pub epa: Option<f64>,
    pub description: String,
}

/// The record as it appears in the dataset file; every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawPlay {
    #[serde(default)]
    pub possession_team: Option<String>,
    #[serde(default)]
    pub down: Option<i64>,
    #[serde(default)]
    pub pass_length: Option<f64>,
    #[serde(default)]
    pub yards_gained: Option<f64>,
    #[serde(default)]
    pub offense_formation: Option<String>,
    #[serde(default)]
    pub coverage_type: Option<String>,
    #[serde(default)]
    pub is_red_zone: Option<bool>,
    #[serde(default)]
    pub play_action: Option<bool>,
    #[serde(default)]
    pub pass_result: Option<String>,
    #[serde(default)]
    pub epa: Option<f64>,
    #[serde(default)]
    pub play_description: Option<String>,
}

/// Why a raw record could not become a [`PlayRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RejectReason {
    Missing(&'static str),
    DownOutOfRange(i64),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "missing {field}"),
            Self::DownOutOfRange(down) => write!(f, "down {down} outside 1-4"),
        }
    }
}

impl TryFrom<RawPlay> for PlayRecord {
    type Error = RejectReason;

    fn try_from(raw: RawPlay) -> Result<Self, Self::Error> {
        let down = raw.down.ok_or(RejectReason::Missing("down"))?;
        if !(1..=4).contains(&down) {
            return Err(RejectReason::DownOutOfRange(down));
        }

        let yards_gained = raw
            .yards_gained
            .filter(|yards| yards.is_finite())
            .ok_or(RejectReason::Missing("yards_gained"))?;

        Ok(Self {
            possession_team: required(raw.possession_team, "possession_team")?,
            down: down as u8,
            pass_length: raw
                .pass_length
                .filter(|len| len.is_finite() && *len >= 0.0),
            yards_gained,
            offense_formation: required(raw.offense_formation, "offense_formation")?,
            coverage_type: required(raw.coverage_type, "coverage_type")?,
            is_red_zone: raw.is_red_zone.unwrap_or(false),
            play_action: raw.play_action.unwrap_or(false),
            pass_result: raw.pass_result.as_deref().and_then(PassResult::from_code),
            epa: raw.epa.filter(|epa| epa.is_finite()),
            description: raw.play_description.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RejectReason> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(RejectReason::Missing(field))
}
