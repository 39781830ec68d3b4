//! Crew records and their validation.

use crate::foundation::error::{CrewframeError, CrewframeResult};
use crate::roster::boat::BoatType;
use serde::{Deserialize, Serialize};

/// Stable identity of a persisted crew record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CrewId(pub u64);

/// A crew roster as stored and as consumed by the engine.
///
/// Created and edited by the roster CRUD subsystem; the engine only reads it.
/// The member list holds rowers only; the cox, when present, lives in
/// `cox_name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crew {
    /// Repository identity; `None` for records not yet persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CrewId>,
    /// Boat name, e.g. "M1 Eight".
    pub name: String,
    /// Owning club display name.
    pub club_name: String,
    /// Race or event name the lineup is for.
    pub race_name: String,
    /// Boat class of the shell.
    pub boat_type: BoatType,
    /// Rower names in seat order, Stroke first.
    #[serde(rename = "crewNames")]
    pub member_names: Vec<String>,
    /// Coxswain name, required iff the class is coxed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cox_name: Option<String>,
    /// Coach name, shown by some template variants when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_name: Option<String>,
}

impl Crew {
    /// Check the required display fields and boat-class consistency.
    ///
    /// Roster-length and cox-name checks live in the seat resolver; this only
    /// rejects what would make any rendering meaningless.
    pub fn validate(&self) -> CrewframeResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("clubName", &self.club_name),
            ("raceName", &self.race_name),
        ] {
            if value.trim().is_empty() {
                return Err(CrewframeError::validation(format!(
                    "required crew field {field:?} is missing or blank"
                )));
            }
        }
        self.boat_type.validate()?;
        if self.member_names.iter().any(|n| n.trim().is_empty()) {
            return Err(CrewframeError::validation(
                "crew member names must not be blank",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/roster/crew.rs"]
mod tests;
