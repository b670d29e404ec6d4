use super::{pretext, tree_url};
use crate::gitlab::PipelineEvent;
use crate::message::{Attachment, ChatMessage, Color, Emoji};

/// Only started, succeeded and failed pipelines are announced
pub fn status_style(status: &str) -> Option<(Color, Emoji, &'static str)> {
    match status {
        "running" => Some((Color::Blue, Emoji::Running, "started a Pipeline")),
        "success" => Some((Color::Green, Emoji::Accept, "pipeline Succeeded")),
        "failed" => Some((Color::Red, Emoji::Deny, "pipeline Failed")),
        _ => None,
    }
}

pub fn translate(event: &PipelineEvent) -> Option<ChatMessage> {
    let pipeline = &event.object_attributes;
    let (color, emoji, phrase) = status_style(&pipeline.status)?;

    let text = format!(
        "**Pipeline ID:** [`{}`]({})\n**Branch:** [`{}`]({})",
        pipeline.id,
        pipeline.url,
        pipeline.git_ref,
        tree_url(&event.project.web_url, &pipeline.git_ref),
    );

    let attachment = Attachment::new(
        color,
        pretext("Pipeline", &event.project.name),
        format!("{} {} {}", emoji, event.user.name, phrase),
    )
    .with_link(pipeline.url.clone())
    .with_text(text);

    Some(ChatMessage::single(attachment))
}
