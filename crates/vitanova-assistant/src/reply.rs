use serde::{Deserialize, Serialize};

use crate::error::AssistantError;

/// A structured assistant reply: conversational text plus an optional
/// navigation/action hint for the presentation layer.
///
/// The serde names match the provider's wire form (`responseText`,
/// `action`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    #[serde(rename = "responseText")]
    pub response_text: String,
    #[serde(default)]
    pub action: AssistantAction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssistantAction {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "goToScreening")]
    GoToScreening,
    #[serde(rename = "goToBooking")]
    GoToBooking,
    #[serde(rename = "EMERGENCY_SOS")]
    EmergencySos,
}

/// Parse a provider response body into a reply.
pub fn parse_reply(body: &str) -> Result<AssistantReply, AssistantError> {
    serde_json::from_str(body).map_err(|e| {
        AssistantError::ResponseParse(format!("{e}. Response: {body}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_form() {
        let reply = parse_reply(
            r#"{"responseText": "I can take you to the screening page if you like.",
                "action": "goToScreening"}"#,
        )
        .unwrap();
        assert_eq!(reply.action, AssistantAction::GoToScreening);
        assert!(reply.response_text.contains("screening page"));
    }

    #[test]
    fn missing_action_defaults_to_none() {
        let reply = parse_reply(r#"{"responseText": "Hello!"}"#).unwrap();
        assert_eq!(reply.action, AssistantAction::None);
    }

    #[test]
    fn emergency_action_round_trips() {
        let reply = parse_reply(
            r#"{"responseText": "Please reach out for help now.", "action": "EMERGENCY_SOS"}"#,
        )
        .unwrap();
        assert_eq!(reply.action, AssistantAction::EmergencySos);

        let json = serde_json::to_string(&reply).unwrap();
        assert!(json.contains("EMERGENCY_SOS"));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(parse_reply("I am not JSON").is_err());
    }
}
