//! Mattermost incoming-webhook message model

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const DEFAULT_USERNAME: &str = "GitLab Bot";
pub const DEFAULT_ICON_URL: &str =
    "https://about.gitlab.com/images/press/logo/png/gitlab-icon-rgb.png";
pub const DEFAULT_FOOTER: &str = "GitLab Bot By IT DICE";

/// Prefix shown in front of every pretext line
pub const GITLAB_EMOJI: &str = ":gitlab:";

/// Attachment bar colors, one per notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// In progress / informational
    Blue,
    /// Success
    Green,
    /// Needs attention
    Yellow,
    /// Approval
    Orange,
    /// Failure / danger
    Red,
    /// Neutral / unknown
    Gray,
}

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Color::Blue => "#27b8d9",
            Color::Green => "#21b838",
            Color::Yellow => "#f7f020",
            Color::Orange => "#ed5e0c",
            Color::Red => "#d90707",
            Color::Gray => "#919191",
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emoji {
    Box,
    Push,
    Request,
    Accept,
    Deny,
    Update,
    Unknown,
    Trash,
    Create,
    Approve,
    Running,
    Release,
}

impl Emoji {
    pub fn as_str(self) -> &'static str {
        match self {
            Emoji::Box => "📦",
            Emoji::Push => "🚀",
            Emoji::Request => "📣",
            Emoji::Accept => "✅",
            Emoji::Deny => "⛔",
            Emoji::Update => "🔄",
            Emoji::Unknown => "🧐",
            Emoji::Trash => "🗑️",
            Emoji::Create => "🌱",
            Emoji::Approve => "👍",
            Emoji::Running => "⏳",
            Emoji::Release => "🎉",
        }
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display identity the bot posts under.
/// Configurable so several relays can share one channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BotProfile {
    pub username: String,
    pub icon_url: String,
    pub footer: String,
}

impl Default for BotProfile {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            icon_url: DEFAULT_ICON_URL.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
        }
    }
}

/// A single rich block within a chat message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attachment {
    pub color: Color,
    pub pretext: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub footer: String,
}

impl Attachment {
    pub fn new(color: Color, pretext: String, title: String) -> Self {
        Self {
            color,
            pretext,
            title,
            title_link: None,
            text: None,
            footer: DEFAULT_FOOTER.to_string(),
        }
    }

    pub fn with_link(mut self, title_link: impl Into<String>) -> Self {
        self.title_link = Some(title_link.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Body POSTed to the Mattermost incoming webhook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub username: String,
    pub icon_url: String,
    pub attachments: Vec<Attachment>,
}

impl ChatMessage {
    /// Wrap one attachment in a message with the default bot identity
    pub fn single(attachment: Attachment) -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            icon_url: DEFAULT_ICON_URL.to_string(),
            attachments: vec![attachment],
        }
    }

    /// Re-brand the message with a configured identity and footer
    pub fn branded(mut self, profile: &BotProfile) -> Self {
        self.username = profile.username.clone();
        self.icon_url = profile.icon_url.clone();
        for attachment in &mut self.attachments {
            attachment.footer = profile.footer.clone();
        }
        self
    }

    #[cfg(test)]
    pub(crate) fn attachment(&self) -> &Attachment {
        self.attachments.first().expect("message has an attachment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_fields_are_omitted() {
        let msg = ChatMessage::single(Attachment::new(
            Color::Gray,
            "pre".to_string(),
            "title".to_string(),
        ));
        let value = serde_json::to_value(&msg).unwrap();

        assert_eq!(
            value,
            json!({
                "username": "GitLab Bot",
                "icon_url": DEFAULT_ICON_URL,
                "attachments": [{
                    "color": "#919191",
                    "pretext": "pre",
                    "title": "title",
                    "footer": "GitLab Bot By IT DICE"
                }]
            })
        );
    }

    #[test]
    fn link_and_text_are_serialized_when_set() {
        let msg = ChatMessage::single(
            Attachment::new(Color::Orange, "pre".to_string(), "title".to_string())
                .with_link("https://gitlab.example.com")
                .with_text("body"),
        );
        let value = serde_json::to_value(&msg).unwrap();
        let attachment = &value["attachments"][0];

        assert_eq!(attachment["color"], "#ed5e0c");
        assert_eq!(attachment["title_link"], "https://gitlab.example.com");
        assert_eq!(attachment["text"], "body");
    }

    #[test]
    fn branding_replaces_identity_and_footer() {
        let profile = BotProfile {
            username: "Relay".to_string(),
            icon_url: "https://cdn.example.com/bot.png".to_string(),
            footer: "Ops".to_string(),
        };
        let msg = ChatMessage::single(Attachment::new(
            Color::Blue,
            "pre".to_string(),
            "title".to_string(),
        ))
        .branded(&profile);

        assert_eq!(msg.username, "Relay");
        assert_eq!(msg.icon_url, "https://cdn.example.com/bot.png");
        assert_eq!(msg.attachment().footer, "Ops");
    }

    #[test]
    fn bot_profile_fills_missing_fields_with_defaults() {
        let profile: BotProfile = toml::from_str(r#"username = "CI""#).unwrap();
        assert_eq!(profile.username, "CI");
        assert_eq!(profile.footer, DEFAULT_FOOTER);
        assert_eq!(profile.icon_url, DEFAULT_ICON_URL);
    }
}
