//! # Mull Architecture
//!
//! Mull is a **UI-agnostic journaling library**: the CLI binary is one thin
//! client of it, and the same core could back any other surface.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, holds the Session             │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic per operation                        │
//! │  - No I/O assumptions beyond the traits below               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (sync.rs, mirror.rs, remote/)                  │
//! │  - Syncer orchestrates mirror-first writes + remote pushes  │
//! │  - RemoteStore (GithubClient / InMemoryRemote)              │
//! │  - Mirror (FileMirror / InMemoryMirror)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Sync Model
//!
//! Both documents live as single JSON files in a GitHub repository, with a
//! per-device mirror on disk as the fast path. Mutations always land in
//! memory and the mirror first; the remote push happens after and may fail
//! without losing anything. Remote reads wholesale-replace local state
//! (remote wins, no merge), and every remote write re-reads the file's
//! revision token immediately beforehand, so a write never carries a token
//! older than the prior read. Two sessions racing on the same repo are not
//! detected: the later write wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`sync`]: The sync orchestrator and the per-run `Session`
//! - [`remote`]: Remote document store client (GitHub Contents API)
//! - [`mirror`]: Local cache of the remote documents
//! - [`model`]: Core data types (`Reflections`, `Diary`)
//! - [`questions`]: The built-in reflection question bank
//! - [`config`]: GitHub settings and share links
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod mirror;
pub mod model;
pub mod questions;
pub mod remote;
pub mod sync;
