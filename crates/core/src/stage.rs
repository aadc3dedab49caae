//! Request lifecycle stages and the transition rules between them.
//!
//! The happy path is linear: `New -> In Progress -> Repaired`. `Scrap` is
//! reachable from any non-terminal stage and condemns the equipment.
//! `Repaired` and `Scrap` are terminal: no transition leaves them, and an
//! attempt to do so is a [`CoreError::Conflict`], never a silent accept.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle stage of a maintenance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStage {
    New,
    InProgress,
    Repaired,
    Scrap,
}

impl RequestStage {
    /// Canonical storage form, matching the `maintenance_requests.stage`
    /// CHECK constraint.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStage::New => "New",
            RequestStage::InProgress => "In Progress",
            RequestStage::Repaired => "Repaired",
            RequestStage::Scrap => "Scrap",
        }
    }

    /// Terminal stages admit no outgoing transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStage::Repaired | RequestStage::Scrap)
    }

    /// A request counts as open while it is `New` or `In Progress`.
    pub fn is_open(&self) -> bool {
        matches!(self, RequestStage::New | RequestStage::InProgress)
    }
}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(RequestStage::New),
            "In Progress" => Ok(RequestStage::InProgress),
            "Repaired" => Ok(RequestStage::Repaired),
            "Scrap" => Ok(RequestStage::Scrap),
            other => Err(CoreError::Validation(format!("Unknown stage: {other}"))),
        }
    }
}

/// Validate a stage change on an existing request.
///
/// Once a request reaches a terminal stage its stage can no longer be
/// written at all — re-submitting the terminal value is rejected the same
/// as moving away from it. Whether the *actor* may perform a given
/// transition (Scrap is Admin-only) is decided separately — this function
/// only answers whether the machine allows it at all.
pub fn validate_transition(current: RequestStage, next: RequestStage) -> Result<(), CoreError> {
    if current.is_terminal() {
        return Err(CoreError::Conflict(format!(
            "Request stage is terminal ('{current}') and cannot change to '{next}'"
        )));
    }
    Ok(())
}

/// Kind of maintenance work requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    /// Something broke; fix it.
    Corrective,
    /// Scheduled upkeep.
    Preventive,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Corrective => "Corrective",
            RequestType::Preventive => "Preventive",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Corrective" => Ok(RequestType::Corrective),
            "Preventive" => Ok(RequestType::Preventive),
            other => Err(CoreError::Validation(format!(
                "Unknown request type: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::RequestStage::*;
    use super::*;

    #[test]
    fn stage_round_trips_through_storage_form() {
        for stage in [New, InProgress, Repaired, Scrap] {
            assert_eq!(stage.as_str().parse::<RequestStage>().unwrap(), stage);
        }
    }

    #[test]
    fn happy_path_transitions_are_allowed() {
        assert_matches!(validate_transition(New, InProgress), Ok(()));
        assert_matches!(validate_transition(InProgress, Repaired), Ok(()));
    }

    #[test]
    fn scrap_is_reachable_from_any_non_terminal_stage() {
        assert_matches!(validate_transition(New, Scrap), Ok(()));
        assert_matches!(validate_transition(InProgress, Scrap), Ok(()));
    }

    #[test]
    fn terminal_stages_admit_no_stage_write_at_all() {
        for terminal in [Repaired, Scrap] {
            for next in [New, InProgress, Repaired, Scrap] {
                assert_matches!(
                    validate_transition(terminal, next),
                    Err(CoreError::Conflict(_)),
                    "expected {terminal} -> {next} to be rejected"
                );
            }
        }
    }

    #[test]
    fn re_submitting_a_non_terminal_stage_is_allowed() {
        for stage in [New, InProgress] {
            assert_matches!(validate_transition(stage, stage), Ok(()));
        }
    }
}
