//! # Remote Document Store
//!
//! This module defines the remote side of persistence. The [`RemoteStore`]
//! trait wraps read/write of a single JSON file at a path in a remote
//! repository, where every update requires the file's current revision
//! token (a content hash).
//!
//! The read contract is deliberately soft: `fetch_document` returns `None`
//! for *any* reason remote data is unavailable — missing credentials,
//! missing file, network failure — and callers treat that as "no remote
//! data", never as a fatal error.
//!
//! The write contract is the safety-critical part: a write must never be
//! attempted with a revision token older than the immediately-prior read.
//! Implementations satisfy this by performing one fresh read-for-token per
//! write attempt, even when the caller already holds a token. There is no
//! conflict detection beyond that: two writers racing on the same file means
//! the later write wins.
//!
//! ## Implementations
//!
//! - [`github::GithubClient`]: production client for the GitHub Contents API
//! - [`memory::InMemoryRemote`]: in-memory fake for tests

use crate::error::Result;

pub mod github;
pub mod memory;

/// A fetched remote file: its decoded content and the revision token
/// required to update it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDocument {
    pub content: String,
    pub revision: String,
}

/// Result of probing the remote with the current credentials.
#[derive(Debug, Clone)]
pub struct ConnectionReport {
    pub ok: bool,
    pub message: String,
}

pub trait RemoteStore {
    /// Whether enough configuration exists to attempt remote calls at all.
    fn is_configured(&self) -> bool;

    /// Read a file and its revision token. `None` means "no remote data
    /// available" for any reason, including failures.
    fn fetch_document(&self, path: &str) -> Option<RemoteDocument>;

    /// Write a file, re-reading the current revision token first. The token
    /// is omitted only when no prior file exists. Errors carry a
    /// human-readable message for display.
    fn write_document(&self, path: &str, content: &str) -> Result<()>;

    /// Check that the configured repository is reachable.
    fn test_connection(&self) -> ConnectionReport;
}
