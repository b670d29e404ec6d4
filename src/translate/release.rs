use super::{pretext, tag_url};
use crate::gitlab::ReleaseEvent;
use crate::message::{Attachment, ChatMessage, Color, Emoji};

/// Announces newly created releases. Updates and deletions are dropped.
pub fn translate(event: &ReleaseEvent) -> Option<ChatMessage> {
    if event.action != "create" {
        return None;
    }

    let text = format!(
        "**Tag:** [`{}`]({})\n{}",
        event.tag,
        tag_url(&event.project.web_url, &event.tag),
        event.description.as_deref().unwrap_or_default(),
    );

    let attachment = Attachment::new(
        Color::Green,
        pretext("Release", &event.project.name),
        format!("{} {} released `{}`", Emoji::Release, event.author_name(), event.name),
    )
    .with_link(event.url.clone())
    .with_text(text);

    Some(ChatMessage::single(attachment))
}
