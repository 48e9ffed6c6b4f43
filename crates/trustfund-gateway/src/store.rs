//! Snapshot store implementations.
//!
//! The store holds one serialized [`SessionUser`] in a fixed slot,
//! overwritten wholesale on every save. [`MemorySnapshotStore`] backs
//! tests; [`JsonFileStore`] gives the desktop/embedded host reload
//! survival the way browser-local storage does for the web app.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use trustfund_core::error::{TrustfundError, TrustfundResult};
use trustfund_core::gateway::SnapshotStore;
use trustfund_core::models::user::SessionUser;

/// In-memory store: a single mutex-guarded slot.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> TrustfundResult<Option<SessionUser>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| TrustfundError::Persistence("snapshot lock poisoned".into()))?;
        match slot.as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| TrustfundError::Persistence(format!("corrupt snapshot: {e}"))),
        }
    }

    fn save(&self, user: &SessionUser) -> TrustfundResult<()> {
        let raw = serde_json::to_string(user)
            .map_err(|e| TrustfundError::Persistence(e.to_string()))?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| TrustfundError::Persistence("snapshot lock poisoned".into()))?;
        *slot = Some(raw);
        Ok(())
    }

    fn clear(&self) -> TrustfundResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| TrustfundError::Persistence("snapshot lock poisoned".into()))?;
        *slot = None;
        Ok(())
    }
}

/// File-backed store: one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> TrustfundResult<Option<SessionUser>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(TrustfundError::Persistence(e.to_string())),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| TrustfundError::Persistence(format!("corrupt snapshot: {e}")))
    }

    fn save(&self, user: &SessionUser) -> TrustfundResult<()> {
        let raw = serde_json::to_string_pretty(user)
            .map_err(|e| TrustfundError::Persistence(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| TrustfundError::Persistence(e.to_string()))
    }

    fn clear(&self) -> TrustfundResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TrustfundError::Persistence(e.to_string())),
        }
    }
}
