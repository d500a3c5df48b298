use super::{ConnectionReport, RemoteDocument, RemoteStore};
use crate::config::GithubConfig;
use crate::error::{MullError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const API_ROOT: &str = "https://api.github.com";
// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("mull/", env!("CARGO_PKG_VERSION"));

/// Production [`RemoteStore`] backed by the GitHub Contents API.
///
/// Reads are `GET /repos/{repo}/contents/{path}?ref={branch}`; writes are
/// commit-style `PUT`s carrying a message, base64 content, the branch, and
/// the prior revision token (the blob sha) when the file already exists.
pub struct GithubClient {
    config: GithubConfig,
    http: Client,
}

/// Response body of a contents read: base64 payload plus the blob sha
/// that serves as the revision token.
#[derive(Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

/// Error bodies from the API carry a `message` field.
#[derive(Deserialize)]
struct ApiMessage {
    message: String,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| MullError::Remote(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { config, http })
    }

    fn contents_url(&self, path: &str) -> String {
        format!("{}/repos/{}/contents/{}", API_ROOT, self.config.repo, path)
    }

    fn auth_header(&self) -> String {
        format!("token {}", self.config.token)
    }

    /// Extract a display message from a non-success response, falling back
    /// to the status line.
    fn error_message(response: reqwest::blocking::Response) -> String {
        let status = response.status();
        response
            .json::<ApiMessage>()
            .map(|body| body.message)
            .unwrap_or_else(|_| status.to_string())
    }
}

/// GitHub wraps the base64 payload at 60 columns; strip all whitespace
/// before decoding.
fn decode_content(raw: &str) -> Option<String> {
    let compact: String = raw.split_whitespace().collect();
    let bytes = BASE64.decode(compact).ok()?;
    String::from_utf8(bytes).ok()
}

impl RemoteStore for GithubClient {
    fn is_configured(&self) -> bool {
        self.config.is_complete()
    }

    fn fetch_document(&self, path: &str) -> Option<RemoteDocument> {
        if !self.is_configured() {
            return None;
        }

        let response = self
            .http
            .get(self.contents_url(path))
            .query(&[("ref", self.config.branch.as_str())])
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .map_err(|e| debug!(path, error = %e, "remote fetch failed"))
            .ok()?;

        if !response.status().is_success() {
            debug!(path, status = %response.status(), "remote fetch non-success");
            return None;
        }

        let body: ContentsResponse = response
            .json()
            .map_err(|e| debug!(path, error = %e, "remote fetch body unreadable"))
            .ok()?;

        let content = decode_content(&body.content)?;
        Some(RemoteDocument {
            content,
            revision: body.sha,
        })
    }

    fn write_document(&self, path: &str, content: &str) -> Result<()> {
        if !self.is_configured() {
            return Err(MullError::Remote("GitHub settings are required".to_string()));
        }

        // Fresh read-for-token before every write; a stale token would
        // clobber changes made by another session since our last read.
        let revision = self.fetch_document(path).map(|doc| doc.revision);

        let mut body = json!({
            "message": format!("Update {}", path),
            "content": BASE64.encode(content),
            "branch": self.config.branch,
        });
        if let Some(sha) = revision {
            body["sha"] = json!(sha);
        }

        let response = self
            .http
            .put(self.contents_url(path))
            .header(AUTHORIZATION, self.auth_header())
            .json(&body)
            .send()
            .map_err(|e| MullError::Remote(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(MullError::Remote(Self::error_message(response)))
        }
    }

    fn test_connection(&self) -> ConnectionReport {
        if !self.is_configured() {
            return ConnectionReport {
                ok: false,
                message: "Repo and token are not configured".to_string(),
            };
        }

        let url = format!("{}/repos/{}", API_ROOT, self.config.repo);
        match self
            .http
            .get(url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
        {
            Ok(response) if response.status().is_success() => ConnectionReport {
                ok: true,
                message: "Connection OK".to_string(),
            },
            Ok(response) => ConnectionReport {
                ok: false,
                message: Self::error_message(response),
            },
            Err(e) => ConnectionReport {
                ok: false,
                message: e.to_string(),
            },
        }
    }
}
