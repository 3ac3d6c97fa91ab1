//! Persisted session cookie.
//!
//! The browser kept the session cookie in its jar; a CLI process needs it
//! to survive between invocations, so the raw `name=value` pair is stored
//! in a file with owner-only permissions.

use std::io;
use std::path::{Path, PathBuf};

/// File-backed store for the session cookie.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store at the given path. Nothing is read or written until
    /// [`load`](Self::load)/[`save`](Self::save) are called.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved cookie, if any.
    ///
    /// A missing file means no session; an empty file is treated the same.
    ///
    /// # Errors
    ///
    /// Returns an error for I/O failures other than the file not existing.
    pub fn load(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let cookie = contents.trim();
                if cookie.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(cookie.to_owned()))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Persist the cookie, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, cookie: &str) -> io::Result<()> {
        std::fs::write(&self.path, format!("{cookie}\n"))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    /// Remove the persisted cookie. Removing a store that never saved
    /// anything is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error for I/O failures other than the file not existing.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> SessionStore {
        let path = std::env::temp_dir().join(format!("si-session-{}", uuid::Uuid::new_v4()));
        SessionStore::new(path)
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let store = temp_store();
        assert_eq!(store.load().expect("load"), None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = temp_store();
        store.save("JSESSIONID=ABC123").expect("save");
        assert_eq!(
            store.load().expect("load").as_deref(),
            Some("JSESSIONID=ABC123")
        );
        store.clear().expect("clear");
    }

    #[test]
    fn test_clear_removes_session() {
        let store = temp_store();
        store.save("JSESSIONID=ABC123").expect("save");
        store.clear().expect("clear");
        assert_eq!(store.load().expect("load"), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = temp_store();
        store.clear().expect("first clear");
        store.clear().expect("second clear");
    }
}
