//! Crew persistence seam and the in-memory implementation.

use crate::foundation::error::{CrewframeError, CrewframeResult};
use crate::roster::crew::{Crew, CrewId};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Injected persistence seam for crew records.
///
/// The engine itself never touches storage; implementations are supplied by
/// the embedding application. `&self` methods with internal synchronization so
/// one repository can back many concurrent request handlers.
pub trait CrewRepository: Send + Sync {
    /// Persist a new crew, assigning and returning its id.
    fn create(&self, crew: Crew) -> CrewframeResult<CrewId>;
    /// Fetch a crew by id.
    fn get(&self, id: CrewId) -> CrewframeResult<Option<Crew>>;
    /// Replace an existing crew record.
    fn update(&self, id: CrewId, crew: Crew) -> CrewframeResult<()>;
    /// Remove a crew record.
    fn delete(&self, id: CrewId) -> CrewframeResult<()>;
    /// List all crews in id order.
    fn list(&self) -> CrewframeResult<Vec<Crew>>;
}

/// Mutex-guarded in-memory repository for tests and single-process embedding.
#[derive(Debug, Default)]
pub struct InMemoryCrewRepository {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    crews: BTreeMap<CrewId, Crew>,
}

impl InMemoryCrewRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CrewframeResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| CrewframeError::Other(anyhow::anyhow!("crew repository lock poisoned")))
    }
}

impl CrewRepository for InMemoryCrewRepository {
    fn create(&self, mut crew: Crew) -> CrewframeResult<CrewId> {
        crew.validate()?;
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let id = CrewId(inner.next_id);
        crew.id = Some(id);
        inner.crews.insert(id, crew);
        Ok(id)
    }

    fn get(&self, id: CrewId) -> CrewframeResult<Option<Crew>> {
        Ok(self.lock()?.crews.get(&id).cloned())
    }

    fn update(&self, id: CrewId, mut crew: Crew) -> CrewframeResult<()> {
        crew.validate()?;
        let mut inner = self.lock()?;
        if !inner.crews.contains_key(&id) {
            return Err(CrewframeError::validation(format!(
                "crew {} does not exist",
                id.0
            )));
        }
        crew.id = Some(id);
        inner.crews.insert(id, crew);
        Ok(())
    }

    fn delete(&self, id: CrewId) -> CrewframeResult<()> {
        let mut inner = self.lock()?;
        if inner.crews.remove(&id).is_none() {
            return Err(CrewframeError::validation(format!(
                "crew {} does not exist",
                id.0
            )));
        }
        Ok(())
    }

    fn list(&self) -> CrewframeResult<Vec<Crew>> {
        Ok(self.lock()?.crews.values().cloned().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/roster/repo.rs"]
mod tests;
