use crate::commands::CmdResult;
use crate::error::{MullError, Result};
use crate::questions;
use crate::sync::Session;

/// Show a reflection question (random unless an id is given) along with the
/// past answers to it.
pub fn run(session: &Session, id: Option<u32>) -> Result<CmdResult> {
    let question = match id {
        Some(id) => questions::by_id(id)
            .ok_or_else(|| MullError::Api(format!("Unknown question id: {}", id)))?,
        None => questions::random(),
    };

    let answers = session
        .reflections
        .by_question(question.id)
        .into_iter()
        .cloned()
        .collect();

    Ok(CmdResult::default()
        .with_question(*question)
        .with_answers(answers))
}
