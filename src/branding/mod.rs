//! Branding resolution: color precedence, club icons, preset/logo seams.

pub mod color;
pub mod icon;
pub mod store;
