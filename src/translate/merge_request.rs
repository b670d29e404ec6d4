use super::{pretext, tree_url};
use crate::gitlab::MergeRequestEvent;
use crate::message::{Attachment, ChatMessage, Color, Emoji};

/// Color, emoji and phrase for a merge request action.
/// Unrecognized actions still notify, under a neutral "Unknown Action".
pub fn action_style(action: Option<&str>) -> (Color, Emoji, &'static str) {
    match action {
        Some("open" | "reopen") => (Color::Yellow, Emoji::Request, "opened a new Merge Request"),
        Some("update") => (Color::Blue, Emoji::Update, "updated a Merge Request"),
        Some("approved") => (Color::Orange, Emoji::Approve, "approved a Merge Request"),
        Some("merge") => (Color::Green, Emoji::Accept, "merged a Merge Request"),
        Some("close") => (Color::Red, Emoji::Deny, "closed a Merge Request"),
        _ => (Color::Gray, Emoji::Unknown, "Unknown Action"),
    }
}

pub fn translate(event: &MergeRequestEvent) -> ChatMessage {
    let mr = &event.object_attributes;
    let repo_url = &event.project.web_url;
    let (color, emoji, phrase) = action_style(mr.action.as_deref());

    let text = format!(
        "**{}** ([`{}`]({}))\n[`{}`]({}) → [`{}`]({})\n{}\n",
        mr.title,
        mr.iid,
        mr.url,
        mr.source_branch,
        tree_url(repo_url, &mr.source_branch),
        mr.target_branch,
        tree_url(repo_url, &mr.target_branch),
        mr.description.as_deref().unwrap_or_default(),
    );

    let attachment = Attachment::new(
        color,
        format!("{} ", pretext("Merge Request", &event.project.name)),
        format!("{} {} {}", emoji, event.user.name, phrase),
    )
    .with_link(mr.url.clone())
    .with_text(text);

    ChatMessage::single(attachment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn merge_request(action: &str) -> MergeRequestEvent {
        serde_json::from_value(json!({
            "object_kind": "merge_request",
            "user": { "name": "Administrator", "username": "root" },
            "project": {
                "name": "Gitlab Test",
                "web_url": "https://gitlab.example.com/gitlabhq/gitlab-test"
            },
            "object_attributes": {
                "action": action,
                "iid": 1,
                "title": "MS-Viewport",
                "description": "Adds the viewport meta tag",
                "source_branch": "ms-viewport",
                "target_branch": "master",
                "url": "https://gitlab.example.com/gitlabhq/gitlab-test/-/merge_requests/1"
            }
        }))
        .unwrap()
    }

    #[test]
    fn open_renders_full_body() {
        let msg = translate(&merge_request("open"));
        let attachment = msg.attachment();

        assert_eq!(attachment.color, Color::Yellow);
        assert_eq!(attachment.title, "📣 Administrator opened a new Merge Request");
        assert_eq!(
            attachment.pretext,
            ":gitlab: GitLab Merge Request Notification for `Gitlab Test` "
        );
        assert_eq!(
            attachment.title_link.as_deref(),
            Some("https://gitlab.example.com/gitlabhq/gitlab-test/-/merge_requests/1")
        );
        assert_eq!(
            attachment.text.as_deref(),
            Some(
                "**MS-Viewport** ([`1`](https://gitlab.example.com/gitlabhq/gitlab-test/-/merge_requests/1))\n\
                 [`ms-viewport`](https://gitlab.example.com/gitlabhq/gitlab-test/-/tree/ms-viewport) → \
                 [`master`](https://gitlab.example.com/gitlabhq/gitlab-test/-/tree/master)\n\
                 Adds the viewport meta tag\n"
            )
        );
    }

    #[test]
    fn reopen_matches_open() {
        assert_eq!(action_style(Some("reopen")), action_style(Some("open")));
    }

    #[test]
    fn action_table() {
        assert_eq!(action_style(Some("update")).0, Color::Blue);
        assert_eq!(
            action_style(Some("merge")),
            (Color::Green, Emoji::Accept, "merged a Merge Request")
        );
        assert_eq!(
            action_style(Some("close")),
            (Color::Red, Emoji::Deny, "closed a Merge Request")
        );
    }

    #[test]
    fn approved_uses_orange_thumbs_up() {
        let msg = translate(&merge_request("approved"));
        assert_eq!(msg.attachment().color, Color::Orange);
        assert_eq!(msg.attachment().title, "👍 Administrator approved a Merge Request");
    }

    #[test]
    fn unknown_action_still_notifies() {
        let msg = translate(&merge_request("bogus"));
        assert_eq!(msg.attachment().color, Color::Gray);
        assert_eq!(msg.attachment().title, "🧐 Administrator Unknown Action");
        assert!(msg.attachment().text.is_some());
    }

    #[test]
    fn missing_description_renders_empty_line() {
        let mut event = merge_request("update");
        event.object_attributes.description = None;
        let text = translate(&event).attachment().text.clone().unwrap();
        assert!(text.ends_with("/-/tree/master)\n\n"));
    }
}
