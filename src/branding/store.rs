//! Club preset and logo storage seams.

use crate::foundation::core::Rgb;
use crate::foundation::error::{CrewframeError, CrewframeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Saved club branding profile, reusable across crews.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClubPreset {
    /// Dominant brand color.
    pub primary_color: Rgb,
    /// Supporting brand color.
    pub secondary_color: Rgb,
    /// Stored logo filename, when the preset carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_filename: Option<String>,
}

/// Collaborator seam: club-preset lookup by id.
pub trait PresetStore: Send + Sync {
    /// Fetch a preset; `None` when the id is unknown.
    fn get(&self, id: &str) -> CrewframeResult<Option<ClubPreset>>;
}

/// Collaborator seam: persisted club-logo byte retrieval by filename.
pub trait LogoStore: Send + Sync {
    /// Fetch raw logo bytes; `None` when the filename is unknown.
    fn load(&self, filename: &str) -> CrewframeResult<Option<Vec<u8>>>;
}

/// In-memory preset store for tests and single-process embedding.
#[derive(Debug, Default)]
pub struct InMemoryPresetStore {
    presets: Mutex<BTreeMap<String, ClubPreset>>,
}

impl InMemoryPresetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a preset under `id`.
    pub fn insert(&self, id: impl Into<String>, preset: ClubPreset) -> CrewframeResult<()> {
        self.presets
            .lock()
            .map_err(|_| CrewframeError::Other(anyhow::anyhow!("preset store lock poisoned")))?
            .insert(id.into(), preset);
        Ok(())
    }
}

impl PresetStore for InMemoryPresetStore {
    fn get(&self, id: &str) -> CrewframeResult<Option<ClubPreset>> {
        Ok(self
            .presets
            .lock()
            .map_err(|_| CrewframeError::Other(anyhow::anyhow!("preset store lock poisoned")))?
            .get(id)
            .cloned())
    }
}

/// In-memory logo store for tests and single-process embedding.
#[derive(Debug, Default)]
pub struct InMemoryLogoStore {
    logos: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryLogoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace logo bytes under `filename`.
    pub fn insert(&self, filename: impl Into<String>, bytes: Vec<u8>) -> CrewframeResult<()> {
        self.logos
            .lock()
            .map_err(|_| CrewframeError::Other(anyhow::anyhow!("logo store lock poisoned")))?
            .insert(filename.into(), bytes);
        Ok(())
    }
}

impl LogoStore for InMemoryLogoStore {
    fn load(&self, filename: &str) -> CrewframeResult<Option<Vec<u8>>> {
        Ok(self
            .logos
            .lock()
            .map_err(|_| CrewframeError::Other(anyhow::anyhow!("logo store lock poisoned")))?
            .get(filename)
            .cloned())
    }
}
