//! Webhook event classification and dispatch

use serde_json::Value;
use std::fmt;

use crate::error::Result;
use crate::gitlab::{MergeRequestEvent, PipelineEvent, PushEvent, ReleaseEvent};
use crate::message::ChatMessage;
use crate::translate;

/// GitLab event kinds the relay knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Push,
    TagPush,
    MergeRequest,
    Pipeline,
    Release,
}

impl EventKind {
    pub fn from_object_kind(kind: &str) -> Option<Self> {
        match kind {
            "push" => Some(EventKind::Push),
            "tag_push" => Some(EventKind::TagPush),
            "merge_request" => Some(EventKind::MergeRequest),
            "pipeline" => Some(EventKind::Pipeline),
            "release" => Some(EventKind::Release),
            _ => None,
        }
    }

    /// Reads `object_kind` from a raw payload
    pub fn from_payload(payload: &Value) -> Option<Self> {
        payload
            .get("object_kind")
            .and_then(|k| k.as_str())
            .and_then(Self::from_object_kind)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Push => "push",
            EventKind::TagPush => "tag_push",
            EventKind::MergeRequest => "merge_request",
            EventKind::Pipeline => "pipeline",
            EventKind::Release => "release",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translates a payload of a known kind.
/// `Ok(None)` means the event is deliberately not announced.
pub fn translate_event(kind: EventKind, payload: Value) -> Result<Option<ChatMessage>> {
    let message = match kind {
        EventKind::Push | EventKind::TagPush => {
            let event: PushEvent = serde_json::from_value(payload)?;
            Some(translate::push::translate(&event))
        }
        EventKind::MergeRequest => {
            let event: MergeRequestEvent = serde_json::from_value(payload)?;
            Some(translate::merge_request::translate(&event))
        }
        EventKind::Pipeline => {
            let event: PipelineEvent = serde_json::from_value(payload)?;
            translate::pipeline::translate(&event)
        }
        EventKind::Release => {
            let event: ReleaseEvent = serde_json::from_value(payload)?;
            translate::release::translate(&event)
        }
    };
    Ok(message)
}
