use serde::{Deserialize, Serialize};

/// Coarse intent tag derived from the command text, used by clients to pick
/// special rendering. `Error` marks domain failures absorbed into an
/// otherwise normal reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Deploy,
    Email,
    Error,
}

impl Action {
    /// Keyword classification over the original command, not the model
    /// reply. Checks are ordered and mutually exclusive: "deploy" wins over
    /// "email" when both match.
    pub fn classify(command: &str) -> Option<Action> {
        let lowered = command.to_lowercase();
        if lowered.contains("deploy") {
            Some(Action::Deploy)
        } else if lowered.contains("email") {
            Some(Action::Email)
        } else {
            None
        }
    }
}

/// Every accepted command yields exactly one of these, success and domain
/// failure alike.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl AssistantReply {
    pub fn plain(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            action: None,
        }
    }

    pub fn tagged(response: impl Into<String>, action: Action) -> Self {
        Self {
            response: response.into(),
            action: Some(action),
        }
    }

    pub fn error(response: impl Into<String>) -> Self {
        Self::tagged(response, Action::Error)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}
