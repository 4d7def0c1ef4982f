use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Text,
}

/// Outbound agent reply as serialized in the chat response body.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: ReplyKind,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: ReplyKind::Text,
        }
    }
}
