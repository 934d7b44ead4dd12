use vitanova_assistant::{
    fallback_reply, parse_reply, AssistantAction, AssistantClient, AssistantError, AssistantReply,
    INSTRUCTION_PROMPT,
};

/// A provider stand-in that replies from a fixed body, the way a real
/// client would parse a model response.
struct ScriptedAssistant {
    body: &'static str,
}

impl AssistantClient for ScriptedAssistant {
    async fn reply(&self, _user_message: &str) -> Result<AssistantReply, AssistantError> {
        parse_reply(self.body)
    }
}

/// A provider that always fails, to drive the fallback path.
struct DownAssistant;

impl AssistantClient for DownAssistant {
    async fn reply(&self, _user_message: &str) -> Result<AssistantReply, AssistantError> {
        Err(AssistantError::Invocation("connection refused".to_string()))
    }
}

#[tokio::test]
async fn scripted_reply_carries_the_action_hint() {
    let assistant = ScriptedAssistant {
        body: r#"{"responseText": "Let's book you in.", "action": "goToBooking"}"#,
    };
    let reply = assistant.reply("I want to talk to someone").await.unwrap();
    assert_eq!(reply.action, AssistantAction::GoToBooking);
}

#[tokio::test]
async fn failed_provider_degrades_to_fallback() {
    let reply = match DownAssistant.reply("hello").await {
        Ok(reply) => reply,
        Err(_) => fallback_reply(),
    };
    assert_eq!(reply.action, AssistantAction::None);
    assert!(reply.response_text.contains("try again"));
}

#[test]
fn instruction_prompt_names_the_wire_contract() {
    assert!(INSTRUCTION_PROMPT.contains("responseText"));
    assert!(INSTRUCTION_PROMPT.contains("EMERGENCY_SOS"));
}
