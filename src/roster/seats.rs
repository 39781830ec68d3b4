//! Canonical seat labeling and roster-to-seat resolution.

use crate::foundation::error::{CrewframeError, CrewframeResult};
use crate::roster::boat::BoatType;

/// One labeled seat in a resolved lineup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seat {
    /// Seat label: `Stroke`, `7` .. `2`, `Bow`, or `Cox`.
    pub label: String,
    /// Crew member occupying the seat.
    pub name: String,
}

/// Ordered lineup produced by [`resolve`]; built fresh per render request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatAssignment {
    /// Rowing seats in stored order: index 0 is Stroke, last is Bow.
    pub seats: Vec<Seat>,
    /// Coxswain slot, present exactly when the boat class is coxed.
    pub cox: Option<Seat>,
}

impl SeatAssignment {
    /// Total labeled entries including the cox slot.
    pub fn len(&self) -> usize {
        self.seats.len() + usize::from(self.cox.is_some())
    }

    /// Return `true` when there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Canonical seat label for `index` in a boat with `seats` rowing seats.
///
/// Index 0 (closest to the stern) is `Stroke`, the last index (closest to the
/// bow) is `Bow`, and interior seats count down from `seats - 1` toward the
/// bow: an eight reads Stroke, 7, 6, 5, 4, 3, 2, Bow. Single sculls use
/// `Stroke` for the lone seat, keeping index 0 uniform across classes.
pub fn seat_label(seats: usize, index: usize) -> String {
    debug_assert!(index < seats);
    if index == 0 {
        return "Stroke".to_owned();
    }
    if index == seats - 1 {
        return "Bow".to_owned();
    }
    (seats - index).to_string()
}

/// Map a roster onto labeled seats for a boat class.
///
/// Pure: same inputs always give the same assignment. The cox is tracked in
/// its own slot and never counted against `boat.seats`. Fails with
/// [`CrewframeError::RosterSizeMismatch`] when the roster length disagrees
/// with the class, and with a validation error when the cox name and the
/// class's cox flag disagree.
pub fn resolve(
    boat: &BoatType,
    member_names: &[String],
    cox_name: Option<&str>,
) -> CrewframeResult<SeatAssignment> {
    if member_names.len() != boat.seats {
        return Err(CrewframeError::RosterSizeMismatch {
            expected: boat.seats,
            actual: member_names.len(),
        });
    }

    let cox = match (boat.has_cox, cox_name) {
        (true, Some(name)) if !name.trim().is_empty() => Some(Seat {
            label: "Cox".to_owned(),
            name: name.trim().to_owned(),
        }),
        (true, _) => {
            return Err(CrewframeError::validation(format!(
                "boat class {:?} is coxed but no cox name was supplied",
                boat.code
            )));
        }
        (false, Some(name)) if !name.trim().is_empty() => {
            return Err(CrewframeError::validation(format!(
                "boat class {:?} has no cox seat but a cox name was supplied",
                boat.code
            )));
        }
        (false, _) => None,
    };

    let seats = member_names
        .iter()
        .enumerate()
        .map(|(i, name)| Seat {
            label: seat_label(boat.seats, i),
            name: name.trim().to_owned(),
        })
        .collect();

    Ok(SeatAssignment { seats, cox })
}

#[cfg(test)]
#[path = "../../tests/unit/roster/seats.rs"]
mod tests;
