//! GitLab webhook payloads
//!
//! Only the fields the relay renders are modelled. Fields GitLab always sends
//! are required, so a payload missing one fails to deserialize.

use serde::Deserialize;

/// 40 zeros: GitLab's hash for a ref that does not exist
pub const NULL_SHA: &str = "0000000000000000000000000000000000000000";

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub web_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
    pub url: String,
}

/// `push` and `tag_push` events
#[derive(Debug, Clone, Deserialize)]
pub struct PushEvent {
    pub repository: Repository,
    pub project: Project,
    pub user_name: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub before: Option<String>,
    pub after: Option<String>,
    #[serde(default)]
    pub commits: Vec<Commit>,
    #[serde(default)]
    pub total_commits_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MergeRequestAttributes {
    pub action: Option<String>,
    pub source_branch: String,
    pub target_branch: String,
    pub title: String,
    pub description: Option<String>,
    pub iid: u64,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MergeRequestEvent {
    pub project: Project,
    pub user: User,
    pub object_attributes: MergeRequestAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineAttributes {
    pub id: u64,
    pub status: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineEvent {
    pub project: Project,
    pub user: User,
    pub object_attributes: PipelineAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedActor {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseCommit {
    pub author: Option<NamedActor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEvent {
    pub action: String,
    pub project: Project,
    pub name: String,
    pub tag: String,
    pub url: String,
    pub description: Option<String>,
    pub author: Option<NamedActor>,
    pub user: Option<NamedActor>,
    pub commit: Option<ReleaseCommit>,
}

impl ReleaseEvent {
    /// First known name out of the release author, the acting user and the
    /// tagged commit's author
    pub fn author_name(&self) -> &str {
        let commit_author = self.commit.as_ref().and_then(|c| c.author.as_ref());
        [self.author.as_ref(), self.user.as_ref(), commit_author]
            .into_iter()
            .flatten()
            .find_map(|actor| actor.name.as_deref())
            .unwrap_or("Unknown")
    }
}
