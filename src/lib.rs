//! Crewframe renders rowing crew rosters into branded social-media graphics.
//!
//! The engine takes a crew, a boat class, a template variant, and branding
//! (colors plus an optional club icon) and deterministically composes a PNG:
//!
//! - Validate the request ([`GenerateRequest`])
//! - Resolve ordered seat labels ([`roster::seats`])
//! - Resolve colors and icon ([`branding`])
//! - Select a template variant and draw ([`templates`], [`render`])
//! - Encode and return raw PNG bytes, or a typed [`CrewframeError`]
//!
//! Persistence, auth, and the HTTP layer are external; they reach the engine
//! through the injected [`CrewRepository`], [`PresetStore`], and
//! [`LogoStore`] seams and the request shape.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod branding;
mod engine;
pub mod foundation;
pub mod render;
pub mod roster;
pub mod scene;
pub mod templates;

pub use crate::branding::color::{ColorPair, ColorScheme};
pub use crate::branding::icon::ResolvedIcon;
pub use crate::branding::store::{
    ClubPreset, InMemoryLogoStore, InMemoryPresetStore, LogoStore, PresetStore,
};
pub use crate::engine::Engine;
pub use crate::foundation::core::{Dimensions, MAX_DIMENSION, Rgb};
pub use crate::foundation::error::{CrewframeError, CrewframeResult, ErrorEnvelope};
pub use crate::render::backend::{CpuBackend, RenderBackend, RenderScene};
pub use crate::render::font::FontSource;
pub use crate::roster::boat::BoatType;
pub use crate::roster::crew::{Crew, CrewId};
pub use crate::roster::repo::{CrewRepository, InMemoryCrewRepository};
pub use crate::roster::seats::{Seat, SeatAssignment};
pub use crate::scene::request::{ClubIcon, GenerateRequest, TemplateConfig};
pub use crate::templates::TemplateVariant;
