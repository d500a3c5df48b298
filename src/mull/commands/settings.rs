use crate::commands::{CmdMessage, CmdResult, MullPaths};
use crate::config::GithubConfig;
use crate::error::{MullError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set { key: String, value: String },
}

/// Get or set GitHub settings. Setting a value loads, mutates, and saves
/// `config.json`; the new value takes effect on the next run.
pub fn run(paths: &MullPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = GithubConfig::load(&paths.data_dir).unwrap_or_default();

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            validate_key(&key)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::Set { key, value } => {
            match key.as_str() {
                "repo" => config.repo = value.trim().to_string(),
                "token" => config.token = value.trim().to_string(),
                "branch" => {
                    let branch = value.trim();
                    config.branch = if branch.is_empty() {
                        "main".to_string()
                    } else {
                        branch.to_string()
                    };
                }
                other => return Err(unknown_key(other)),
            }
            config.save(&paths.data_dir)?;

            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("Saved {}", key)));
            Ok(result)
        }
    }
}

fn validate_key(key: &str) -> Result<()> {
    match key {
        "repo" | "token" | "branch" => Ok(()),
        other => Err(unknown_key(other)),
    }
}

fn unknown_key(key: &str) -> MullError {
    MullError::Api(format!(
        "Unknown config key: {} (expected repo, token, or branch)",
        key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn paths(name: &str) -> MullPaths {
        let dir: PathBuf = env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        MullPaths { data_dir: dir }
    }

    #[test]
    fn set_then_show() {
        let paths = paths("mull_test_settings_set");

        run(
            &paths,
            ConfigAction::Set {
                key: "repo".to_string(),
                value: "alice/journal".to_string(),
            },
        )
        .unwrap();

        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().repo, "alice/journal");

        let _ = fs::remove_dir_all(&paths.data_dir);
    }

    #[test]
    fn empty_branch_falls_back_to_main() {
        let paths = paths("mull_test_settings_branch");

        let result = run(
            &paths,
            ConfigAction::Set {
                key: "branch".to_string(),
                value: "  ".to_string(),
            },
        )
        .unwrap();
        assert_eq!(result.config.unwrap().branch, "main");

        let _ = fs::remove_dir_all(&paths.data_dir);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let paths = paths("mull_test_settings_badkey");
        assert!(run(&paths, ConfigAction::ShowKey("nope".to_string())).is_err());
        assert!(run(
            &paths,
            ConfigAction::Set {
                key: "nope".to_string(),
                value: "x".to_string()
            }
        )
        .is_err());
    }
}
