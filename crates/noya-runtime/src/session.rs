use crate::Result;
use noya_types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The signed-in account, persisted between CLI invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub uid: UserId,
    pub email: String,
    /// `password` or the federated provider name
    pub method: String,
    pub signed_in_at: Timestamp,
}

/// `session.toml` in the data directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session.toml"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let session: Session = toml::from_str(&content)?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(session)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_session_roundtrip_and_clear() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = SessionStore::new(temp_dir.path());
        assert!(store.load()?.is_none());

        let session = Session {
            uid: UserId::from("u1"),
            email: "ada@example.com".to_string(),
            method: "password".to_string(),
            signed_in_at: noya_types::now(),
        };
        store.save(&session)?;
        assert_eq!(store.load()?, Some(session));

        assert!(store.clear()?);
        assert!(store.load()?.is_none());
        assert!(!store.clear()?);

        Ok(())
    }
}
