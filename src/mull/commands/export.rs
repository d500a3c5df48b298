use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MullError, Result};
use crate::model::Bundle;
use crate::sync::Session;
use chrono::Local;
use std::fs;
use std::path::Path;

/// Serialize both documents into one JSON file in `out_dir`, named
/// `reflection-diary-YYYY-MM-DD.json`.
pub fn run(session: &Session, out_dir: &Path) -> Result<CmdResult> {
    let bundle = Bundle {
        reflections: session.reflections.clone(),
        diary: session.diary.clone(),
    };

    let filename = format!("reflection-diary-{}.json", Local::now().format("%Y-%m-%d"));
    let path = out_dir.join(filename);
    let content = serde_json::to_string_pretty(&bundle).map_err(MullError::Serialization)?;
    fs::write(&path, content).map_err(MullError::Io)?;

    let mut result = CmdResult::default().with_export_path(path.clone());
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    )));
    Ok(result)
}
