use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MullError, Result};
use crate::mirror::Mirror;
use crate::model::ReflectionAnswer;
use crate::questions;
use crate::remote::RemoteStore;
use crate::sync::{DocKind, Session, Syncer};
use chrono::NaiveDate;

/// Append an answer to a reflection question, then persist the reflections
/// document. Answers are append-only; saving twice on the same day keeps
/// both.
pub fn run<R: RemoteStore, M: Mirror>(
    session: &mut Session,
    syncer: &mut Syncer<R, M>,
    question_id: u32,
    date: NaiveDate,
    text: &str,
) -> Result<CmdResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(MullError::Api("Answer cannot be empty".into()));
    }
    if questions::by_id(question_id).is_none() {
        return Err(MullError::Api(format!("Unknown question id: {}", question_id)));
    }

    session.reflections.append(ReflectionAnswer {
        question_id,
        date,
        text: text.to_string(),
    });

    let outcome = syncer.persist(session, DocKind::Reflections)?;

    let mut result = CmdResult::default();
    if outcome.remote_ok {
        result.add_message(CmdMessage::success(outcome.message));
    } else {
        result.add_message(CmdMessage::warning(outcome.message));
    }
    Ok(result)
}
