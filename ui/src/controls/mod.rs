//! Filter controls: raw picker/toggle state and the reader that turns it into
//! [`FilterCriteria`].

mod panel;
pub use panel::FilterPanel;

use dioxus::logger::tracing::warn;
use thiserror::Error;

use crate::core::{DistanceBucket, FilterCriteria};

/// Picker value meaning "match all".
pub const ALL: &str = "all";

/// A change coming from the control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    SetCoverage(String),
    SetDown(String),
    SetDistance(String),
    SetFormation(String),
    ToggleRedZone,
    TogglePlayAction,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlValueError {
    #[error("down `{0}` is not 1-4")]
    Down(String),
    #[error(transparent)]
    Distance(#[from] crate::core::filter::UnknownDistance),
}

/// Current control values exactly as the pickers report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControls {
    pub coverage: String,
    pub down: String,
    pub distance: String,
    pub formation: String,
    pub red_zone: bool,
    pub play_action: bool,
}

impl Default for FilterControls {
    fn default() -> Self {
        Self {
            coverage: ALL.into(),
            down: ALL.into(),
            distance: ALL.into(),
            formation: ALL.into(),
            red_zone: false,
            play_action: false,
        }
    }
}

impl FilterControls {
    /// Apply one command synchronously.
    pub fn apply(&mut self, command: FilterCommand) {
        match command {
            FilterCommand::SetCoverage(value) => self.coverage = value,
            FilterCommand::SetDown(value) => self.down = value,
            FilterCommand::SetDistance(value) => self.distance = value,
            FilterCommand::SetFormation(value) => self.formation = value,
            FilterCommand::ToggleRedZone => self.red_zone = !self.red_zone,
            FilterCommand::TogglePlayAction => self.play_action = !self.play_action,
            FilterCommand::Reset => *self = Self::default(),
        }
    }

    /// Read the controls into criteria. Values that don't parse read as
    /// "match all".
    pub fn read(&self) -> FilterCriteria {
        FilterCriteria {
            coverage: category(&self.coverage),
            down: parse_down(&self.down).unwrap_or_else(|err| {
                warn!("ignoring down filter: {err}");
                None
            }),
            distance: parse_distance(&self.distance).unwrap_or_else(|err| {
                warn!("ignoring distance filter: {err}");
                None
            }),
            formation: category(&self.formation),
            red_zone_only: self.red_zone,
            play_action_only: self.play_action,
        }
    }
}

fn category(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == ALL {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_down(raw: &str) -> Result<Option<u8>, ControlValueError> {
    let Some(value) = category(raw) else {
        return Ok(None);
    };
    match value.parse::<u8>() {
        Ok(down @ 1..=4) => Ok(Some(down)),
        _ => Err(ControlValueError::Down(value)),
    }
}

fn parse_distance(raw: &str) -> Result<Option<DistanceBucket>, ControlValueError> {
    match category(raw) {
        None => Ok(None),
        Some(value) => Ok(Some(value.parse()?)),
    }
}
