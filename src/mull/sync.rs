//! # Sync Orchestrator
//!
//! Ties the in-memory documents, the local mirror, and the remote store
//! together. The flow is always the same: mutations land in memory first,
//! [`Syncer::persist`] then writes the mirror synchronously and attempts the
//! remote write, and the remote outcome is reported back without ever
//! undoing the local write. On startup [`Syncer::hydrate`] goes the other
//! way: mirror first for a fast path, then the remote wholesale-replaces
//! whatever it has (remote wins, no merge).
//!
//! No error escapes this module as a panic; every failure degrades to "the
//! remote copy is stale, local state is intact".

use crate::error::Result;
use crate::mirror::Mirror;
use crate::model::{Diary, Reflections};
use crate::remote::RemoteStore;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// The two persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Reflections,
    Diary,
}

impl DocKind {
    pub const ALL: [DocKind; 2] = [DocKind::Reflections, DocKind::Diary];

    /// Key in the local mirror.
    pub fn mirror_key(self) -> &'static str {
        match self {
            DocKind::Reflections => "reflections",
            DocKind::Diary => "diary",
        }
    }

    /// Path of the document file in the remote repository.
    pub fn remote_path(self) -> &'static str {
        match self {
            DocKind::Reflections => "data/reflections.json",
            DocKind::Diary => "data/diary.json",
        }
    }
}

/// The in-memory state of one run: both documents plus the date currently
/// being viewed. Created empty, hydrated from mirror and remote, and never
/// shared through globals.
#[derive(Debug, Clone)]
pub struct Session {
    pub reflections: Reflections,
    pub diary: Diary,
    pub current_date: NaiveDate,
}

impl Session {
    pub fn new() -> Self {
        Self {
            reflections: Reflections::default(),
            diary: Diary::default(),
            current_date: Local::now().date_naive(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a persist: the mirror write has already happened by the time
/// this exists, so only the remote side can have failed.
#[derive(Debug, Clone)]
pub struct PersistOutcome {
    pub remote_ok: bool,
    pub message: String,
}

/// Outcome of a remote pull, for user-visible reporting.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyncReport {
    pub fetched: usize,
    pub absent: usize,
}

pub struct Syncer<R: RemoteStore, M: Mirror> {
    remote: R,
    mirror: M,
}

impl<R: RemoteStore, M: Mirror> Syncer<R, M> {
    pub fn new(remote: R, mirror: M) -> Self {
        Self { remote, mirror }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Startup population: mirror first (always available after the first
    /// run), then a remote pull when credentials are configured. Absent
    /// sources keep whatever was already hydrated.
    pub fn hydrate(&mut self, session: &mut Session) {
        self.load_local(session);

        if self.remote.is_configured() {
            self.pull_remote(session);
        }
    }

    /// The mirror-only half of [`hydrate`](Self::hydrate).
    pub fn load_local(&mut self, session: &mut Session) {
        for kind in DocKind::ALL {
            if let Some(text) = self.mirror.read(kind.mirror_key()) {
                if !apply(session, kind, &text) {
                    warn!(key = kind.mirror_key(), "ignoring malformed mirror document");
                }
            }
        }
    }

    /// Explicit user-triggered refresh: always attempts the remote pull and
    /// reports what happened.
    pub fn refresh(&mut self, session: &mut Session) -> SyncReport {
        self.pull_remote(session)
    }

    /// Write one document to the mirror, then attempt the remote write. The
    /// mirror write happens first and unconditionally, so a remote failure
    /// never loses the mutation already applied in memory.
    pub fn persist(&mut self, session: &Session, kind: DocKind) -> Result<PersistOutcome> {
        let text = serialize(session, kind)?;
        self.mirror.write(kind.mirror_key(), &text);

        match self.remote.write_document(kind.remote_path(), &text) {
            Ok(()) => Ok(PersistOutcome {
                remote_ok: true,
                message: format!("Saved {} to GitHub", kind.mirror_key()),
            }),
            Err(e) => Ok(PersistOutcome {
                remote_ok: false,
                message: format!("Saved locally; remote save failed: {}", e),
            }),
        }
    }

    fn pull_remote(&mut self, session: &mut Session) -> SyncReport {
        let mut report = SyncReport::default();
        for kind in DocKind::ALL {
            match self.remote.fetch_document(kind.remote_path()) {
                Some(doc) if apply(session, kind, &doc.content) => {
                    self.mirror.write(kind.mirror_key(), &doc.content);
                    report.fetched += 1;
                }
                Some(_) => {
                    warn!(path = kind.remote_path(), "ignoring malformed remote document");
                    report.absent += 1;
                }
                None => {
                    debug!(path = kind.remote_path(), "no remote data available");
                    report.absent += 1;
                }
            }
        }
        report
    }
}

/// Wholesale-replace one in-memory document from JSON text. Returns false
/// (leaving the session untouched) when the text does not parse.
fn apply(session: &mut Session, kind: DocKind, text: &str) -> bool {
    match kind {
        DocKind::Reflections => match serde_json::from_str(text) {
            Ok(doc) => {
                session.reflections = doc;
                true
            }
            Err(e) => {
                debug!(error = %e, "reflections document did not parse");
                false
            }
        },
        DocKind::Diary => match serde_json::from_str(text) {
            Ok(doc) => {
                session.diary = doc;
                true
            }
            Err(e) => {
                debug!(error = %e, "diary document did not parse");
                false
            }
        },
    }
}

fn serialize(session: &Session, kind: DocKind) -> Result<String> {
    let text = match kind {
        DocKind::Reflections => serde_json::to_string_pretty(&session.reflections)?,
        DocKind::Diary => serde_json::to_string_pretty(&session.diary)?,
    };
    Ok(text)
}
