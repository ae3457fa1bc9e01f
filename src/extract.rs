use serde_json::Value;
use tracing::debug;

/// Sentinel `message` GitHub returns in place of a commit array for a
/// repository with no history.
pub const EMPTY_REPO_MESSAGE: &str = "Git Repository is empty.";

/// Pull `(email, source description)` pairs out of a commit listing.
///
/// Commit objects are not trusted: when the unauthenticated rate limit runs
/// out mid-traversal the API degrades to an error-shaped object where a
/// commit array was expected, and iterating it yields entries without the
/// nested author fields. Such records are dropped with a debug diagnostic
/// rather than aborting the traversal.
pub fn commits_to_pairs(commits: &[Value], username: &str, repo: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for commit in commits {
        let email = commit
            .get("commit")
            .and_then(|c| c.get("author"))
            .and_then(|a| a.get("email"))
            .and_then(Value::as_str);
        let login = commit
            .get("author")
            .and_then(|a| a.get("login"))
            .and_then(Value::as_str);

        match (email, login) {
            (Some(email), Some(login)) => {
                pairs.push((
                    email.to_string(),
                    format!("Repo: https://www.github.com/{username}/{repo}, User: {login}"),
                ));
            }
            _ => {
                debug!(%repo, "skipping malformed commit record (rate limit exhausted?)");
            }
        }
    }

    pairs
}

/// Pull `(email, source description)` pairs out of a public events listing.
///
/// Only `PushEvent` records carry commits; for each, only the first commit
/// of the payload is consulted.
pub fn events_to_pairs(events: &[Value]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for event in events {
        if event.get("type").and_then(Value::as_str) != Some("PushEvent") {
            continue;
        }

        let email = event
            .get("payload")
            .and_then(|p| p.get("commits"))
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("author"))
            .and_then(|a| a.get("email"))
            .and_then(Value::as_str);
        let login = event
            .get("actor")
            .and_then(|a| a.get("login"))
            .and_then(Value::as_str);

        match (email, login) {
            (Some(email), Some(login)) => {
                pairs.push((email.to_string(), format!("Public Commit, User: {login}")));
            }
            _ => {
                debug!("skipping malformed push event record");
            }
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn valid_commit_yields_exact_source_description() {
        let commits = vec![json!({
            "commit": { "author": { "email": "a@x.com" } },
            "author": { "login": "alice" },
        })];

        assert_eq!(
            commits_to_pairs(&commits, "alice", "r1"),
            vec![(
                "a@x.com".to_string(),
                "Repo: https://www.github.com/alice/r1, User: alice".to_string()
            )]
        );
    }

    #[test]
    fn commits_missing_author_fields_are_skipped() {
        let commits = vec![
            // no nested commit.author.email
            json!({ "author": { "login": "alice" } }),
            // GitHub serves "author": null for commits without a linked account
            json!({
                "commit": { "author": { "email": "a@x.com" } },
                "author": null,
            }),
            // rate-limit degradation: error object fields instead of a commit
            json!({ "message": "API rate limit exceeded", "documentation_url": "https://docs.github.com" }),
            json!({
                "commit": { "author": { "email": "b@y.com" } },
                "author": { "login": "bob" },
            }),
        ];

        let pairs = commits_to_pairs(&commits, "alice", "r1");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "b@y.com");
    }

    #[test]
    fn extraction_is_total_over_arbitrary_values() {
        let commits = vec![json!(null), json!(42), json!("string"), json!([])];
        assert_eq!(commits_to_pairs(&commits, "alice", "r1"), vec![]);
    }

    #[test]
    fn only_push_events_are_considered() {
        let events = vec![
            json!({
                "type": "WatchEvent",
                "actor": { "login": "alice" },
                "payload": {},
            }),
            json!({
                "type": "PushEvent",
                "actor": { "login": "alice" },
                "payload": { "commits": [
                    { "author": { "email": "a@x.com" } },
                    { "author": { "email": "ignored@x.com" } },
                ]},
            }),
        ];

        assert_eq!(
            events_to_pairs(&events),
            vec![(
                "a@x.com".to_string(),
                "Public Commit, User: alice".to_string()
            )]
        );
    }

    #[test]
    fn push_event_with_empty_commit_list_is_skipped() {
        let events = vec![json!({
            "type": "PushEvent",
            "actor": { "login": "alice" },
            "payload": { "commits": [] },
        })];

        assert_eq!(events_to_pairs(&events), vec![]);
    }
}
