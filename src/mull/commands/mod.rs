use crate::config::GithubConfig;
use crate::model::{DiaryEntry, ReflectionAnswer};
use crate::questions::Question;
use std::path::PathBuf;

pub mod answers;
pub mod check;
pub mod diary;
pub mod export;
pub mod import;
pub mod question;
pub mod reflect;
pub mod settings;
pub mod share;
pub mod sync;

/// Where mull keeps its per-user files: the config and the mirror both live
/// under the data directory.
#[derive(Debug, Clone)]
pub struct MullPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub question: Option<Question>,
    pub answers: Vec<ReflectionAnswer>,
    pub entry: Option<DiaryEntry>,
    pub past_entries: Vec<DiaryEntry>,
    pub config: Option<GithubConfig>,
    pub share_link: Option<String>,
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.question = Some(question);
        self
    }

    pub fn with_answers(mut self, answers: Vec<ReflectionAnswer>) -> Self {
        self.answers = answers;
        self
    }

    pub fn with_entry(mut self, entry: Option<DiaryEntry>) -> Self {
        self.entry = entry;
        self
    }

    pub fn with_past_entries(mut self, entries: Vec<DiaryEntry>) -> Self {
        self.past_entries = entries;
        self
    }

    pub fn with_config(mut self, config: GithubConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_share_link(mut self, link: String) -> Self {
        self.share_link = Some(link);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }
}
