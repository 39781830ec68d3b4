//! Boat class catalog keyed by short code.

use crate::foundation::error::{CrewframeError, CrewframeResult};
use serde::{Deserialize, Serialize};

/// Rowing shell configuration: seat count and coxswain presence.
///
/// Only the literal set of supported codes is accepted; an unknown code is a
/// validation error, never a default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatType {
    /// Short code, e.g. `8+`, `4x`, `1x`.
    #[serde(rename = "value")]
    pub code: String,
    /// Canonical display name, e.g. "Coxed Eight".
    pub name: String,
    /// Number of rowing seats (the cox never counts against this).
    pub seats: usize,
    /// Whether the class carries a coxswain (`+` suffix).
    pub has_cox: bool,
}

/// The supported boat class codes, stern-heavy classes first.
pub const SUPPORTED_CODES: [&str; 8] = ["8+", "4+", "4-", "4x", "2+", "2-", "2x", "1x"];

impl BoatType {
    /// Look up a boat class by its short code.
    pub fn from_code(code: &str) -> CrewframeResult<Self> {
        let (seats, name) = match code {
            "8+" => (8, "Coxed Eight"),
            "4+" => (4, "Coxed Four"),
            "4-" => (4, "Coxless Four"),
            "4x" => (4, "Quad Scull"),
            "2+" => (2, "Coxed Pair"),
            "2-" => (2, "Coxless Pair"),
            "2x" => (2, "Double Scull"),
            "1x" => (1, "Single Scull"),
            other => {
                return Err(CrewframeError::validation(format!(
                    "unknown boat class code {other:?} (supported: {})",
                    SUPPORTED_CODES.join(", ")
                )));
            }
        };
        Ok(Self {
            code: code.to_owned(),
            name: name.to_owned(),
            seats,
            has_cox: code.ends_with('+'),
        })
    }

    /// Check that `seats`/`has_cox` agree with what `code` implies.
    ///
    /// Deserialized requests carry these fields redundantly; disagreement is a
    /// validation error rather than something to silently repair.
    pub fn validate(&self) -> CrewframeResult<()> {
        let canonical = Self::from_code(&self.code)?;
        if self.seats != canonical.seats || self.has_cox != canonical.has_cox {
            return Err(CrewframeError::validation(format!(
                "boat class {:?} implies {} seats, cox: {}, request says {} seats, cox: {}",
                self.code, canonical.seats, canonical.has_cox, self.seats, self.has_cox
            )));
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for BoatType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Accept either the bare code string or the full request object shape.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(String),
            Full {
                value: String,
                seats: usize,
                #[serde(rename = "hasCox")]
                has_cox: bool,
                #[serde(default)]
                name: Option<String>,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Code(code) => BoatType::from_code(&code).map_err(serde::de::Error::custom),
            Repr::Full {
                value,
                seats,
                has_cox,
                name,
            } => {
                let mut bt = BoatType::from_code(&value).map_err(serde::de::Error::custom)?;
                bt.seats = seats;
                bt.has_cox = has_cox;
                if let Some(n) = name {
                    bt.name = n;
                }
                bt.validate().map_err(serde::de::Error::custom)?;
                Ok(bt)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/roster/boat.rs"]
mod tests;
