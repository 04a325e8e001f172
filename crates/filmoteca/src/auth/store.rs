//! Session persistence backends.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, trace};

use super::session::SessionState;
use crate::error::{Error, StorageError};

/// Where the session survives between runs.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored state. A store holding nothing yields the default
    /// (anonymous) state.
    async fn load(&self) -> Result<SessionState, Error>;

    /// Replace the stored state.
    async fn save(&self, state: &SessionState) -> Result<(), Error>;

    /// Remove everything. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), Error>;
}

/// Keeps the session in memory only.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    state: Arc<Mutex<SessionState>>,
}

impl MemorySessionStore {
    /// A store seeded with an existing session.
    pub fn with_state(state: SessionState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<SessionState, Error> {
        Ok(self.state.lock().await.clone())
    }

    async fn save(&self, state: &SessionState) -> Result<(), Error> {
        *self.state.lock().await = state.clone();
        Ok(())
    }

    async fn clear(&self) -> Result<(), Error> {
        *self.state.lock().await = SessionState::default();
        Ok(())
    }
}

/// Keeps the session in a JSON file, readable only by its owner on Unix.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
        .into()
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<SessionState, Error> {
        let json = match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                trace!(path = %self.path.display(), "no session file");
                return Ok(SessionState::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&json).map_err(|source| {
            StorageError::Corrupt {
                path: self.path.display().to_string(),
                source,
            }
            .into()
        })
    }

    async fn save(&self, state: &SessionState) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(state).map_err(|source| StorageError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.io_error(e))?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| self.io_error(e))?;
        }

        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), Error> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "session removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
