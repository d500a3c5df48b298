use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MullError, Result};
use crate::questions;
use crate::sync::Session;

/// List every answer ever given to one question, newest first.
pub fn run(session: &Session, question_id: u32) -> Result<CmdResult> {
    let question = questions::by_id(question_id)
        .ok_or_else(|| MullError::Api(format!("Unknown question id: {}", question_id)))?;

    let answers: Vec<_> = session
        .reflections
        .by_question(question_id)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_question(*question);
    if answers.is_empty() {
        result.add_message(CmdMessage::info("No answers to this question yet."));
    }
    result.answers = answers;
    Ok(result)
}
