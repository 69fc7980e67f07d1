use reqwest::Client;
use serde_json::{json, Value};

/// What one submitted command produced: the text to render and append to the
/// transcript, and whether to surface the deployment success banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub text: String,
    pub deployed: bool,
}

impl TurnOutcome {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            deployed: false,
        }
    }
}

/// HTTP client for the assistant backend. One call per user turn, no
/// retries; every failure mode collapses into displayable text.
pub struct AssistantClient {
    http: Client,
    base_url: String,
}

impl AssistantClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub async fn send_command(&self, command: &str) -> TurnOutcome {
        let url = format!(
            "{}/api/assistant",
            self.base_url.trim_end_matches('/')
        );

        let response = match self
            .http
            .post(&url)
            .json(&json!({ "command": command }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return TurnOutcome::plain(format!("Connection error: {e}")),
        };

        let status = response.status();
        if status.as_u16() != 200 {
            let body = response.text().await.unwrap_or_default();
            return TurnOutcome::plain(format!("API error: {} - {}", status.as_u16(), body));
        }

        let reply: Value = match response.json().await {
            Ok(reply) => reply,
            Err(e) => return TurnOutcome::plain(format!("Connection error: {e}")),
        };

        match reply.get("response").and_then(Value::as_str) {
            Some(text) => TurnOutcome {
                text: text.to_string(),
                deployed: reply.get("action").and_then(Value::as_str) == Some("deploy"),
            },
            None => {
                let error = reply
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown error");
                TurnOutcome::plain(format!("Error: {error}"))
            }
        }
    }
}
