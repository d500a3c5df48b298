use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::mirror::Mirror;
use crate::model::UpsertOutcome;
use crate::remote::RemoteStore;
use crate::sync::{DocKind, Session, Syncer};
use chrono::NaiveDate;

/// Show the entry for a date together with entries from the same day in
/// other years.
pub fn view(session: &Session, date: NaiveDate) -> Result<CmdResult> {
    let entry = session.diary.entry_for(date).cloned();
    let past = session
        .diary
        .on_this_day(date)
        .into_iter()
        .cloned()
        .collect();

    Ok(CmdResult::default()
        .with_entry(entry)
        .with_past_entries(past))
}

/// Save the entry for a date: non-empty text replaces or creates, empty
/// text deletes. The diary document is persisted either way, matching the
/// one-save-button flow this tool grew out of.
pub fn write<R: RemoteStore, M: Mirror>(
    session: &mut Session,
    syncer: &mut Syncer<R, M>,
    date: NaiveDate,
    text: &str,
) -> Result<CmdResult> {
    let outcome = session.diary.upsert(date, text.trim());
    let persisted = syncer.persist(session, DocKind::Diary)?;

    let mut result = CmdResult::default();
    match outcome {
        UpsertOutcome::Added | UpsertOutcome::Updated => {}
        UpsertOutcome::Removed => {
            result.add_message(CmdMessage::info(format!("Removed the entry for {}", date)));
        }
        UpsertOutcome::Noop => {
            result.add_message(CmdMessage::info(format!("No entry for {} to remove", date)));
        }
    }
    if persisted.remote_ok {
        result.add_message(CmdMessage::success(persisted.message));
    } else {
        result.add_message(CmdMessage::warning(persisted.message));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mirror::InMemoryMirror;
    use crate::remote::memory::InMemoryRemote;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn syncer() -> Syncer<InMemoryRemote, InMemoryMirror> {
        Syncer::new(InMemoryRemote::new(), InMemoryMirror::new())
    }

    #[test]
    fn write_then_view() {
        let mut session = Session::new();
        let mut syncer = syncer();

        write(&mut session, &mut syncer, date("2024-03-01"), "a day").unwrap();
        let result = view(&session, date("2024-03-01")).unwrap();
        assert_eq!(result.entry.unwrap().text, "a day");
    }

    #[test]
    fn empty_text_removes_and_persists() {
        let mut session = Session::new();
        let mut syncer = syncer();

        write(&mut session, &mut syncer, date("2024-03-01"), "A").unwrap();
        write(&mut session, &mut syncer, date("2024-03-01"), "").unwrap();

        assert!(session.diary.entries.is_empty());
        // The emptied document was pushed too.
        let remote = syncer.remote().document("data/diary.json").unwrap();
        assert!(!remote.contains("2024-03-01"));
    }

    #[test]
    fn view_includes_other_years_only() {
        let mut session = Session::new();
        let mut syncer = syncer();
        write(&mut session, &mut syncer, date("2023-07-04"), "last year").unwrap();
        write(&mut session, &mut syncer, date("2024-07-04"), "this year").unwrap();

        let result = view(&session, date("2024-07-04")).unwrap();
        assert_eq!(result.entry.unwrap().text, "this year");
        assert_eq!(result.past_entries.len(), 1);
        assert_eq!(result.past_entries[0].text, "last year");
    }

    #[test]
    fn remote_failure_keeps_the_entry() {
        let mut session = Session::new();
        let mut syncer = Syncer::new(
            InMemoryRemote::new().with_failing_writes(),
            InMemoryMirror::new(),
        );

        let result = write(&mut session, &mut syncer, date("2024-03-01"), "kept").unwrap();
        assert!(matches!(
            result.messages.last().unwrap().level,
            crate::commands::MessageLevel::Warning
        ));
        assert_eq!(session.diary.entries.len(), 1);
    }
}
