use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::remote::RemoteStore;

/// Probe the remote with the current credentials and report the result.
pub fn run<R: RemoteStore>(remote: &R) -> Result<CmdResult> {
    let report = remote.test_connection();

    let mut result = CmdResult::default();
    if report.ok {
        result.add_message(CmdMessage::success(report.message));
    } else {
        result.add_message(CmdMessage::error(report.message));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::remote::memory::InMemoryRemote;

    #[test]
    fn reports_success_when_configured() {
        let result = run(&InMemoryRemote::new()).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
    }

    #[test]
    fn reports_error_when_unconfigured() {
        let result = run(&InMemoryRemote::unconfigured()).unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
    }
}
