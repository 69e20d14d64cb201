use std::io::SeekFrom;
use std::path::PathBuf;

use async_fd_lock::LockWrite;
use serde::{Deserialize, Serialize};
use tokio::fs::OpenOptions;
use tokio::io::AsyncSeekExt;
use tokio::io::AsyncWriteExt;

use crate::dir::WorknetDirectory;

pub const SESSION_FILE_NAME: &str = "session.json";

/// Tokens and identity of a logged-in user, as persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// File-backed persistence of the current [`Session`].
///
/// Injected into the flows that need it instead of being read as ambient
/// state; clearing the store is the logout mechanism.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(datadir: &WorknetDirectory) -> Self {
        let mut path = datadir.path().to_path_buf();
        path.push(SESSION_FILE_NAME);
        Self { path }
    }

    /// A missing file means no session. A file that does not parse is
    /// treated the same way, so a corrupted store never locks the user out.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SessionError::ReadingFile(format!(
                    "Reading session file: {}",
                    e
                )))
            }
        };
        match serde_json::from_slice::<Session>(&content) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!("Something wrong with the session file: {:?}", e);
                tracing::warn!("Session file is ignored");
                Ok(None)
            }
        }
    }

    pub async fn save(&self, session: &Session) -> Result<(), SessionError> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .await
            .map_err(|e| SessionError::WritingFile(format!("Opening file: {}", e)))?
            .lock_write()
            .await
            .map_err(|e| SessionError::WritingFile(format!("Locking file: {:?}", e)))?;

        let content = serde_json::to_vec_pretty(session).map_err(|e| {
            SessionError::WritingFile(format!("Failed to serialize session: {}", e))
        })?;

        file.seek(SeekFrom::Start(0)).await.map_err(|e| {
            SessionError::WritingFile(format!("Failed to seek to start of file: {}", e))
        })?;

        file.write_all(&content).await.map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            SessionError::WritingFile(e.to_string())
        })?;

        file.inner_mut()
            .set_len(content.len() as u64)
            .await
            .map_err(|e| SessionError::WritingFile(format!("Failed to truncate file: {}", e)))?;

        Ok(())
    }

    pub async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::WritingFile(format!(
                "Removing session file: {}",
                e
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub enum SessionError {
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(&WorknetDirectory::new(dir.path().to_path_buf()))
    }

    #[tokio::test]
    async fn save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        assert_eq!(store.load().unwrap(), None);

        let session = Session {
            email: "ann@x.com".to_string(),
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        };
        store.save(&session).await.unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().await.unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing an already empty store is not an error.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn corrupted_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        tokio::fs::write(dir.path().join(SESSION_FILE_NAME), b"{not json")
            .await
            .unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn save_overwrites_longer_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let long = Session {
            email: "someone-with-a-long-address@example.com".to_string(),
            access_token: "a".repeat(256),
            refresh_token: "r".repeat(256),
        };
        store.save(&long).await.unwrap();
        let short = Session {
            email: "a@b.co".to_string(),
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        };
        store.save(&short).await.unwrap();
        assert_eq!(store.load().unwrap(), Some(short));
    }
}
