use super::{ConnectionReport, RemoteDocument, RemoteStore};
use crate::error::{MullError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory [`RemoteStore`] for tests. Mimics the production client's
/// shape: writes re-read the current revision first, and the revision
/// advances on every successful write. A fetch counter makes the
/// read-before-write property observable.
pub struct InMemoryRemote {
    configured: bool,
    fail_writes: bool,
    files: RefCell<HashMap<String, (String, u64)>>,
    fetches: Cell<usize>,
}

impl Default for InMemoryRemote {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRemote {
    pub fn new() -> Self {
        Self {
            configured: true,
            fail_writes: false,
            files: RefCell::new(HashMap::new()),
            fetches: Cell::new(0),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Make every subsequent write fail, as if the API rejected it.
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Seed a remote file as if another session had written it.
    pub fn seed(&self, path: &str, content: &str) {
        let mut files = self.files.borrow_mut();
        let revision = files.get(path).map(|(_, rev)| rev + 1).unwrap_or(1);
        files.insert(path.to_string(), (content.to_string(), revision));
    }

    pub fn document(&self, path: &str) -> Option<String> {
        self.files
            .borrow()
            .get(path)
            .map(|(content, _)| content.clone())
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl RemoteStore for InMemoryRemote {
    fn is_configured(&self) -> bool {
        self.configured
    }

    fn fetch_document(&self, path: &str) -> Option<RemoteDocument> {
        if !self.configured {
            return None;
        }
        self.fetches.set(self.fetches.get() + 1);
        self.files
            .borrow()
            .get(path)
            .map(|(content, revision)| RemoteDocument {
                content: content.clone(),
                revision: revision.to_string(),
            })
    }

    fn write_document(&self, path: &str, content: &str) -> Result<()> {
        if !self.configured {
            return Err(MullError::Remote("GitHub settings are required".to_string()));
        }

        // Same shape as the production client: one fresh token read per
        // write attempt.
        let revision = self.fetch_document(path).map(|doc| doc.revision);

        if self.fail_writes {
            return Err(MullError::Remote("simulated remote failure".to_string()));
        }

        let next = revision
            .and_then(|rev| rev.parse::<u64>().ok())
            .map(|rev| rev + 1)
            .unwrap_or(1);
        self.files
            .borrow_mut()
            .insert(path.to_string(), (content.to_string(), next));
        Ok(())
    }

    fn test_connection(&self) -> ConnectionReport {
        if self.configured {
            ConnectionReport {
                ok: true,
                message: "Connection OK".to_string(),
            }
        } else {
            ConnectionReport {
                ok: false,
                message: "Repo and token are not configured".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_performs_exactly_one_fresh_fetch() {
        let remote = InMemoryRemote::new();
        remote.write_document("data/diary.json", "{}").unwrap();
        assert_eq!(remote.fetch_count(), 1);

        remote.write_document("data/diary.json", "{}").unwrap();
        assert_eq!(remote.fetch_count(), 2);
    }

    #[test]
    fn write_advances_revision() {
        let remote = InMemoryRemote::new();
        remote.write_document("f", "a").unwrap();
        let first = remote.fetch_document("f").unwrap().revision;
        remote.write_document("f", "b").unwrap();
        let second = remote.fetch_document("f").unwrap().revision;
        assert_ne!(first, second);
        assert_eq!(remote.document("f").unwrap(), "b");
    }

    #[test]
    fn unconfigured_fetch_is_absent_and_uncounted() {
        let remote = InMemoryRemote::unconfigured();
        assert!(remote.fetch_document("f").is_none());
        assert_eq!(remote.fetch_count(), 0);
        assert!(remote.write_document("f", "x").is_err());
    }

    #[test]
    fn failing_writes_still_read_the_token_first() {
        let remote = InMemoryRemote::new().with_failing_writes();
        assert!(remote.write_document("f", "x").is_err());
        assert_eq!(remote.fetch_count(), 1);
        assert!(remote.document("f").is_none());
    }
}
