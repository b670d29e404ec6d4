use super::{commit_line, pretext, tree_url};
use crate::gitlab::{NULL_SHA, PushEvent};
use crate::message::{Attachment, ChatMessage, Color, Emoji};

const BRANCH_PREFIX: &str = "refs/heads/";

/// What a push did to its ref
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushKind {
    Deleted,
    Created,
    Pushed,
}

impl PushKind {
    pub fn classify(event: &PushEvent) -> Self {
        if event.total_commits_count == 0 && event.after.as_deref() == Some(NULL_SHA) {
            PushKind::Deleted
        } else if event.before.as_deref() == Some(NULL_SHA) {
            PushKind::Created
        } else {
            PushKind::Pushed
        }
    }
}

/// Display name and link for a ref.
/// Branch refs link to their tree; any other ref links to the repository.
pub fn branch_target(git_ref: &str, repo_url: &str) -> (String, String) {
    match git_ref.strip_prefix(BRANCH_PREFIX) {
        Some(branch) => (branch.to_string(), tree_url(repo_url, branch)),
        None => (git_ref.to_string(), repo_url.to_string()),
    }
}

pub fn translate(event: &PushEvent) -> ChatMessage {
    let user = &event.user_name;
    let (branch, branch_url) = branch_target(&event.git_ref, &event.project.web_url);
    let pretext = pretext("Push", &event.repository.name);

    let attachment = match PushKind::classify(event) {
        // A deleted ref has nothing to link to or list
        PushKind::Deleted => Attachment::new(
            Color::Gray,
            pretext,
            format!("{} {} deleted {}", Emoji::Trash, user, branch),
        ),
        PushKind::Created => {
            let attachment = Attachment::new(
                Color::Green,
                pretext,
                format!("{} {} created {}", Emoji::Create, user, branch),
            );
            // Without a head commit there is nothing to show, so only the title
            match event.commits.last() {
                Some(head) if event.total_commits_count > 0 => attachment
                    .with_link(branch_url)
                    .with_text(commit_line(head)),
                _ => attachment,
            }
        }
        PushKind::Pushed => {
            let text = if event.commits.is_empty() {
                format!("{} No commits in this push.", Emoji::Box)
            } else {
                event
                    .commits
                    .iter()
                    .map(commit_line)
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            Attachment::new(
                Color::Blue,
                pretext,
                format!(
                    "{} {} pushed {} commit(s) to {}",
                    Emoji::Push,
                    user,
                    event.total_commits_count,
                    branch
                ),
            )
            .with_link(branch_url)
            .with_text(text)
        }
    };

    ChatMessage::single(attachment)
}
