//! GitLab event to Mattermost message translation
//!
//! Every translator is a pure function of its payload. Translators that can
//! decline to notify return `Option<ChatMessage>`.

pub mod merge_request;
pub mod pipeline;
pub mod push;
pub mod release;

use crate::gitlab::Commit;
use crate::message::GITLAB_EMOJI;

/// Link to a branch's file tree
pub(crate) fn tree_url(repo_url: &str, branch: &str) -> String {
    format!("{}/-/tree/{}", repo_url, branch)
}

/// Link to a tag page
pub(crate) fn tag_url(repo_url: &str, tag: &str) -> String {
    format!("{}/-/tags/{}", repo_url, tag)
}

/// First 7 characters of a commit hash
pub(crate) fn short_sha(id: &str) -> &str {
    id.char_indices().nth(7).map_or(id, |(idx, _)| &id[..idx])
}

/// `- message ([`abc1234`](url))`
pub(crate) fn commit_line(commit: &Commit) -> String {
    format!(
        "- {} ([`{}`]({}))",
        commit.message.trim(),
        short_sha(&commit.id),
        commit.url
    )
}

pub(crate) fn pretext(category: &str, repo_name: &str) -> String {
    format!(
        "{} GitLab {} Notification for `{}`",
        GITLAB_EMOJI, category, repo_name
    )
}
