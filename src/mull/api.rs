//! # API Facade
//!
//! Thin entry point over the command modules, in the same spirit as the
//! storage split: UIs call these methods with plain Rust arguments and get
//! structured `CmdResult`s back. Nothing here writes to stdout/stderr or
//! exits the process.
//!
//! `MullApi<R, M>` is generic over the remote store and the mirror:
//! production is `MullApi<GithubClient, FileMirror>`, tests run on
//! `MullApi<InMemoryRemote, InMemoryMirror>` without touching the network
//! or the filesystem.

use crate::commands;
use crate::error::Result;
use crate::mirror::Mirror;
use crate::remote::RemoteStore;
use crate::sync::{Session, Syncer};
use chrono::NaiveDate;
use std::path::Path;

pub struct MullApi<R: RemoteStore, M: Mirror> {
    session: Session,
    syncer: Syncer<R, M>,
    paths: commands::MullPaths,
}

impl<R: RemoteStore, M: Mirror> MullApi<R, M> {
    /// Build the facade around an empty session. Call [`hydrate`](Self::hydrate)
    /// before operations that read or mutate the documents.
    pub fn new(remote: R, mirror: M, paths: commands::MullPaths) -> Self {
        Self {
            session: Session::new(),
            syncer: Syncer::new(remote, mirror),
            paths,
        }
    }

    /// Populate the session from the mirror, then from the remote when
    /// configured.
    pub fn hydrate(&mut self) {
        self.syncer.hydrate(&mut self.session);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn show_question(&self, id: Option<u32>) -> Result<commands::CmdResult> {
        commands::question::run(&self.session, id)
    }

    pub fn save_reflection(
        &mut self,
        question_id: u32,
        date: NaiveDate,
        text: &str,
    ) -> Result<commands::CmdResult> {
        commands::reflect::run(&mut self.session, &mut self.syncer, question_id, date, text)
    }

    pub fn past_answers(&self, question_id: u32) -> Result<commands::CmdResult> {
        commands::answers::run(&self.session, question_id)
    }

    pub fn view_diary(&self, date: NaiveDate) -> Result<commands::CmdResult> {
        commands::diary::view(&self.session, date)
    }

    pub fn write_diary(&mut self, date: NaiveDate, text: &str) -> Result<commands::CmdResult> {
        commands::diary::write(&mut self.session, &mut self.syncer, date, text)
    }

    pub fn sync_now(&mut self) -> Result<commands::CmdResult> {
        commands::sync::run(&mut self.session, &mut self.syncer)
    }

    pub fn export(&self, out_dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.session, out_dir)
    }

    pub fn import(&mut self, file: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.session, &mut self.syncer, file)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::settings::run(&self.paths, action)
    }

    pub fn generate_share_link(&self) -> Result<commands::CmdResult> {
        commands::share::generate(&self.paths)
    }

    pub fn apply_share_link(&self, input: &str) -> Result<commands::CmdResult> {
        commands::share::apply(&self.paths, input)
    }

    pub fn test_connection(&self) -> Result<commands::CmdResult> {
        commands::check::run(self.syncer.remote())
    }
}

pub use crate::commands::settings::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, MullPaths};
