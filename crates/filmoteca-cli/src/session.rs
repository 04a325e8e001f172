//! Session file location and access checks.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use filmoteca::{Access, ApiClient, ApiUrl, Denied, FileSessionStore, SessionState};

/// Get the default session file path.
fn default_session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "filmoteca").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Build a client for `api` that resumes the stored session.
pub async fn connect(api: &str, session_file: Option<&Path>) -> Result<ApiClient> {
    let api = ApiUrl::new(api).context("Invalid API URL")?;
    let path = match session_file {
        Some(path) => path.to_path_buf(),
        None => default_session_path()?,
    };
    tracing::debug!(path = %path.display(), "using session file");

    ApiClient::restore(api, FileSessionStore::new(path))
        .await
        .context("Failed to load session")
}

/// Check the session against a rule, returning it when access is granted.
pub async fn require(client: &ApiClient, access: Access) -> Result<SessionState> {
    let session = client.session().await;
    match access.check(&session) {
        Ok(()) => Ok(session),
        Err(Denied::LoginRequired) => bail!("Not logged in. Run 'filmoteca login' first."),
        Err(Denied::Unauthorized) => bail!("401 Unauthorized: you cannot access this page."),
    }
}

/// The logged-in user's email.
pub async fn own_email(client: &ApiClient) -> Result<String> {
    require(client, Access::Authenticated)
        .await?
        .email
        .context("Session has no email. Run 'filmoteca login' again.")
}
