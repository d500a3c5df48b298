use crate::commands::{CmdMessage, CmdResult, MullPaths};
use crate::config::GithubConfig;
use crate::error::Result;

/// Generate a share link fragment carrying the current settings, for
/// configuring another device with one paste.
pub fn generate(paths: &MullPaths) -> Result<CmdResult> {
    let config = GithubConfig::load(&paths.data_dir).unwrap_or_default();
    let fragment = config.to_share_fragment()?;

    let mut result = CmdResult::default().with_share_link(fragment);
    result.add_message(CmdMessage::info(
        "The link contains your access token; share it carefully.",
    ));
    Ok(result)
}

/// Apply a pasted share link (or bare fragment). A malformed link changes
/// nothing: the boundary swallows the parse failure and reports it.
pub fn apply(paths: &MullPaths, input: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match GithubConfig::from_share_fragment(input) {
        Some(config) => {
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success("Settings loaded from share link"));
            result.config = Some(config);
        }
        None => {
            result.add_message(CmdMessage::error(
                "Share link not recognized; settings unchanged",
            ));
        }
    }
    Ok(result)
}
