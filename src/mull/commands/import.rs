use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MullError, Result};
use crate::mirror::Mirror;
use crate::model::Bundle;
use crate::remote::RemoteStore;
use crate::sync::{DocKind, Session, Syncer};
use std::fs;
use std::path::Path;

/// Read a previously exported combined file, wholesale-replace both
/// in-memory documents, and persist them.
pub fn run<R: RemoteStore, M: Mirror>(
    session: &mut Session,
    syncer: &mut Syncer<R, M>,
    path: &Path,
) -> Result<CmdResult> {
    let content = fs::read_to_string(path).map_err(MullError::Io)?;
    let bundle: Bundle = serde_json::from_str(&content)
        .map_err(|e| MullError::Api(format!("Not a mull export file: {}", e)))?;

    session.reflections = bundle.reflections;
    session.diary = bundle.diary;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} answer(s) and {} diary entries",
        session.reflections.answers.len(),
        session.diary.entries.len()
    )));

    for kind in DocKind::ALL {
        let outcome = syncer.persist(session, kind)?;
        if !outcome.remote_ok {
            result.add_message(CmdMessage::warning(outcome.message));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::export;
    use crate::mirror::InMemoryMirror;
    use crate::model::ReflectionAnswer;
    use crate::remote::memory::InMemoryRemote;
    use std::env;

    #[test]
    fn export_then_import_round_trips() {
        let dir = env::temp_dir().join("mull_test_import_roundtrip");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let mut session = Session::new();
        session.reflections.append(ReflectionAnswer {
            question_id: 5,
            date: "2024-01-01".parse().unwrap(),
            text: "answer".to_string(),
        });
        session.reflections.append(ReflectionAnswer {
            question_id: 5,
            date: "2024-01-01".parse().unwrap(),
            text: "second same-day answer".to_string(),
        });
        session.diary.upsert("2024-03-01".parse().unwrap(), "entry");

        let exported = export::run(&session, &dir).unwrap();
        let path = exported.export_path.unwrap();

        let mut restored = Session::new();
        let mut syncer = Syncer::new(InMemoryRemote::new(), InMemoryMirror::new());
        run(&mut restored, &mut syncer, &path).unwrap();

        // Content-equal and order-equal.
        assert_eq!(restored.reflections, session.reflections);
        assert_eq!(restored.diary, session.diary);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn import_persists_both_documents() {
        let dir = env::temp_dir().join("mull_test_import_persists");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let session = Session::new();
        let exported = export::run(&session, &dir).unwrap();

        let mut restored = Session::new();
        let mut syncer = Syncer::new(InMemoryRemote::new(), InMemoryMirror::new());
        run(&mut restored, &mut syncer, &exported.export_path.unwrap()).unwrap();

        assert!(syncer.remote().document("data/reflections.json").is_some());
        assert!(syncer.remote().document("data/diary.json").is_some());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn garbage_file_is_a_clean_error() {
        let dir = env::temp_dir().join("mull_test_import_garbage");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("garbage.json");
        fs::write(&path, "not json").unwrap();

        let mut session = Session::new();
        let mut syncer = Syncer::new(InMemoryRemote::new(), InMemoryMirror::new());
        assert!(run(&mut session, &mut syncer, &path).is_err());

        let _ = fs::remove_dir_all(&dir);
    }
}
