//! Crew rosters: boat classes, seat assignment, persistence seam.

pub mod boat;
pub mod crew;
pub mod repo;
pub mod seats;
