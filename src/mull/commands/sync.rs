use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::mirror::Mirror;
use crate::remote::RemoteStore;
use crate::sync::{Session, Syncer};

/// Explicit refresh from the remote store. Unlike startup hydration this
/// always attempts the remote fetch and reports the outcome.
pub fn run<R: RemoteStore, M: Mirror>(
    session: &mut Session,
    syncer: &mut Syncer<R, M>,
) -> Result<CmdResult> {
    syncer.load_local(session);
    let report = syncer.refresh(session);

    let mut result = CmdResult::default();
    if report.fetched > 0 {
        result.add_message(CmdMessage::success(format!(
            "Sync complete: {} document(s) fetched",
            report.fetched
        )));
    }
    if report.absent > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} document(s) had no remote data",
            report.absent
        )));
    }
    Ok(result)
}
