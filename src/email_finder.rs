use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::extract::{commits_to_pairs, events_to_pairs, EMPTY_REPO_MESSAGE};
use crate::sources::EmailSourceMap;

const API_URL: &str = "https://api.github.com";

/// Ways a lookup can fail before any traversal happens. Malformed data
/// encountered mid-traversal is never an error; it is skipped in extraction.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The username does not resolve on GitHub.
    #[error("Provided GitHub username: {0} does not exist.")]
    UnknownUser(String),

    /// GitHub answered the user lookup with a structured rate-limit or
    /// abuse-detection message (recognized by its "API" prefix). Carried
    /// verbatim, documentation link included.
    #[error("{0}")]
    Api(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Successful lookup: every email discovered, and how long the traversal
/// took. The elapsed time covers repository/event scanning only, not the
/// initial user-existence check.
#[derive(Debug)]
pub struct Lookup {
    pub elapsed: Duration,
    pub emails: EmailSourceMap,
}

/// The slice of the GitHub REST API the lookup consumes. Split out so the
/// orchestration can run against canned responses.
trait GitHubApi {
    async fn check_user_exists(&self) -> Result<(), LookupError>;
    async fn list_repos(&self) -> Result<Vec<Value>, LookupError>;
    async fn list_commits(&self, repo: &str) -> Result<Vec<Value>, LookupError>;
    async fn list_public_events(&self) -> Result<Vec<Value>, LookupError>;
}

/// Drives the whole discovery pipeline against one target username:
/// existence check, then commit histories of every non-fork repository,
/// then the public events feed as a fallback.
pub struct EmailFinder {
    client: Client,
    username: String,
}

impl EmailFinder {
    pub fn new(username: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent("Rust GitHub API Client")
            .build()?;

        Ok(EmailFinder {
            client,
            username: username.to_string(),
        })
    }

    /// Run the full lookup. Returns `Err` only when the username does not
    /// resolve or GitHub rejects the user lookup; an empty map is a valid
    /// success.
    pub async fn lookup(&self) -> Result<Lookup, LookupError> {
        run_lookup(self, &self.username).await
    }

    async fn get_array(&self, url: &str) -> Result<Vec<Value>, LookupError> {
        debug!("Requesting URL: {}", url);
        let body: Value = self.client.get(url).send().await?.json().await?;

        match body {
            Value::Array(items) => Ok(items),
            _ => {
                warn!("expected a JSON array from {}, got something else", url);
                Ok(Vec::new())
            }
        }
    }
}

impl GitHubApi for EmailFinder {
    /// `GET /users/{username}` — the only call whose failure aborts the
    /// lookup. A non-success status is classified off the response body.
    async fn check_user_exists(&self) -> Result<(), LookupError> {
        let url = format!("{API_URL}/users/{}", self.username);
        debug!("Requesting URL: {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status().is_success() {
            return Ok(());
        }

        let body: Value = response.json().await?;
        Err(classify_user_failure(&body, &self.username))
    }

    async fn list_repos(&self) -> Result<Vec<Value>, LookupError> {
        let url = format!("{API_URL}/users/{}/repos", self.username);
        self.get_array(&url).await
    }

    /// `GET /repos/{username}/{repo}/commits`. A repository with no history
    /// answers with a sentinel message object instead of an array; both that
    /// and any other non-array body count as zero commits.
    async fn list_commits(&self, repo: &str) -> Result<Vec<Value>, LookupError> {
        let url = format!("{API_URL}/repos/{}/{repo}/commits", self.username);
        debug!("Requesting URL: {}", url);

        let body: Value = self.client.get(&url).send().await?.json().await?;

        if body.get("message").and_then(Value::as_str) == Some(EMPTY_REPO_MESSAGE) {
            debug!(%repo, "repository is empty");
            return Ok(Vec::new());
        }

        match body {
            Value::Array(commits) => Ok(commits),
            _ => {
                warn!(%repo, "commit listing was not an array, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn list_public_events(&self) -> Result<Vec<Value>, LookupError> {
        let url = format!("{API_URL}/users/{}/events/public", self.username);
        self.get_array(&url).await
    }
}

/// The lookup state machine: user check, repository traversal, then the
/// events feed when the traversal came up empty. The fallback is consulted
/// at most once and an empty result is still a success.
async fn run_lookup<A: GitHubApi>(api: &A, username: &str) -> Result<Lookup, LookupError> {
    api.check_user_exists().await?;

    let start = Instant::now();
    let mut emails = scan_repos(api, username).await?;

    if emails.is_empty() {
        debug!("no emails in repository commits, falling back to public events");
        let events = api.list_public_events().await?;
        emails.merge(events_to_pairs(&events));
    }

    Ok(Lookup {
        elapsed: start.elapsed(),
        emails,
    })
}

/// Walk every non-fork repository and merge its commit emails into one map.
/// Degraded commit listings (rate limit mid-traversal) contribute nothing
/// but never stop the walk.
async fn scan_repos<A: GitHubApi>(api: &A, username: &str) -> Result<EmailSourceMap, LookupError> {
    let mut emails = EmailSourceMap::new();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    for repo in api.list_repos().await? {
        let name = repo.get("name").and_then(Value::as_str);
        let fork = repo.get("fork").and_then(Value::as_bool);

        let (Some(name), Some(false)) = (name, fork) else {
            continue;
        };

        pb.set_message(format!("Scanning {username}/{name}"));
        pb.tick();

        let commits = api.list_commits(name).await?;
        emails.merge(commits_to_pairs(&commits, username, name));
    }

    pb.finish_and_clear();
    info!(
        "Scanned repositories for '{}': {} email(s) so far",
        username,
        emails.len()
    );
    Ok(emails)
}

/// Turn a failed user-lookup body into the matching error. An "API"-prefixed
/// message is GitHub's rate-limit/abuse shape and is surfaced verbatim with
/// its documentation link; anything else means the user does not exist.
fn classify_user_failure(body: &Value, username: &str) -> LookupError {
    let message = body.get("message").and_then(Value::as_str).unwrap_or("");

    if message.starts_with("API") {
        let mut full = message.to_string();
        if let Some(url) = body.get("documentation_url").and_then(Value::as_str) {
            full.push_str(" Documentation URL: ");
            full.push_str(url);
        }
        LookupError::Api(full)
    } else {
        LookupError::UnknownUser(username.to_string())
    }
}
