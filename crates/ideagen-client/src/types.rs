use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString, EnumVariantNames};

use crate::ClientError;

/// Team whose agent crew works on the idea
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumVariantNames,
    Serialize,
    Deserialize,
)]
pub enum Team {
    #[default]
    HR,
    Marketing,
    #[serde(rename = "Product Management")]
    #[strum(serialize = "Product Management")]
    ProductManagement,
}

impl Team {
    /// The team after this one in selector order, wrapping around
    pub fn next(self) -> Team {
        match self {
            Team::HR => Team::Marketing,
            Team::Marketing => Team::ProductManagement,
            Team::ProductManagement => Team::HR,
        }
    }
}

/// Body of `POST /api/generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub team: Team,
    pub idea: String,
}

impl GenerateRequest {
    pub fn new(team: Team, idea: impl Into<String>) -> Self {
        Self {
            team,
            idea: idea.into(),
        }
    }
}

/// One turn of the agent conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMessage {
    pub agent: String,
    pub message: String,
}

impl AgentMessage {
    pub fn new(agent: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            message: message.into(),
        }
    }

    /// First character of the agent name, used as an avatar badge
    pub fn initial(&self) -> Option<char> {
        self.agent.chars().next()
    }
}

/// Everything a successful generation produced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub conversations: Vec<AgentMessage>,
    pub final_document: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    conversations: Option<Vec<AgentMessage>>,
    #[serde(default)]
    final_document: Option<String>,
}

impl From<GenerateResponse> for GenerationResult {
    fn from(response: GenerateResponse) -> Self {
        GenerationResult {
            conversations: response.conversations.unwrap_or_default(),
            final_document: response.final_document.unwrap_or_default(),
        }
    }
}

impl GenerationResult {
    /// Decode a response body from the generation service.
    ///
    /// A non-null `error` field wins over any other content. Missing or null
    /// `conversations` / `final_document` decode as empty.
    pub fn from_body(body: &str) -> Result<GenerationResult, ClientError> {
        let value: Value = serde_json::from_str(body)?;
        let Value::Object(fields) = &value else {
            return Err(ClientError::Decode("expected a JSON object".to_string()));
        };

        match fields.get("error") {
            None | Some(Value::Null) => {}
            Some(Value::String(message)) => return Err(ClientError::Application(message.clone())),
            Some(other) => return Err(ClientError::Application(other.to_string())),
        }

        let response: GenerateResponse = serde_json::from_value(value)?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn team_wire_names() {
        assert_eq!(serde_json::to_string(&Team::HR).unwrap(), "\"HR\"");
        assert_eq!(
            serde_json::to_string(&Team::ProductManagement).unwrap(),
            "\"Product Management\""
        );
        assert_eq!(Team::ProductManagement.to_string(), "Product Management");
        assert_eq!(Team::from_str("Marketing").unwrap(), Team::Marketing);
        assert!(Team::from_str("Finance").is_err());
    }

    #[test]
    fn team_next_wraps() {
        assert_eq!(Team::default(), Team::HR);
        assert_eq!(Team::HR.next(), Team::Marketing);
        assert_eq!(Team::Marketing.next(), Team::ProductManagement);
        assert_eq!(Team::ProductManagement.next(), Team::HR);
    }

    #[test]
    fn request_body_shape() {
        let request = GenerateRequest::new(Team::ProductManagement, "A new onboarding flow");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"team": "Product Management", "idea": "A new onboarding flow"})
        );
    }

    #[test]
    fn decodes_full_response() {
        let body = r#"{
            "conversations": [
                {"agent": "Researcher", "message": "**Findings**"},
                {"agent": "Writer", "message": "Draft ready"}
            ],
            "final_document": "Final text"
        }"#;

        let result = GenerationResult::from_body(body).unwrap();
        assert_eq!(
            result.conversations,
            vec![
                AgentMessage::new("Researcher", "**Findings**"),
                AgentMessage::new("Writer", "Draft ready"),
            ]
        );
        assert_eq!(result.final_document, "Final text");
    }

    #[test]
    fn absent_and_null_fields_are_empty() {
        assert_eq!(
            GenerationResult::from_body("{}").unwrap(),
            GenerationResult::default()
        );
        assert_eq!(
            GenerationResult::from_body(r#"{"conversations": null, "final_document": null}"#)
                .unwrap(),
            GenerationResult::default()
        );
    }

    #[test]
    fn error_field_wins() {
        let body = r#"{"error": "crew failed", "final_document": "ignored"}"#;
        match GenerationResult::from_body(body) {
            Err(ClientError::Application(message)) => assert_eq!(message, "crew failed"),
            other => panic!("expected application error, got {other:?}"),
        }

        let body = r#"{"error": {"code": 7}}"#;
        match GenerationResult::from_body(body) {
            Err(ClientError::Application(message)) => assert_eq!(message, r#"{"code":7}"#),
            other => panic!("expected application error, got {other:?}"),
        }
    }

    #[test]
    fn null_error_is_not_a_failure() {
        let result =
            GenerationResult::from_body(r#"{"error": null, "final_document": "ok"}"#).unwrap();
        assert_eq!(result.final_document, "ok");
    }

    #[test]
    fn other_shapes_are_decode_errors() {
        for body in [
            "not json",
            "[]",
            "\"text\"",
            r#"{"conversations": "nope"}"#,
            r#"{"conversations": [{"agent": "A"}]}"#,
            r#"{"final_document": 12}"#,
        ] {
            assert!(
                matches!(GenerationResult::from_body(body), Err(ClientError::Decode(_))),
                "body {body} should not decode"
            );
        }
    }

    #[test]
    fn initial_of_agent() {
        assert_eq!(AgentMessage::new("Planner", "").initial(), Some('P'));
        assert_eq!(AgentMessage::new("", "").initial(), None);
    }
}
