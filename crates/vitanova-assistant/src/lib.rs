//! vitanova-assistant
//!
//! The conversational-assistant seam. The core treats the provider as an
//! opaque request/response pair: free-text user input plus a fixed
//! instruction prompt go out, a structured reply with an optional
//! navigation hint comes back. No retry policy — a failed call degrades
//! to [`fallback_reply`].

pub mod error;
pub mod reply;

pub use error::AssistantError;
pub use reply::{parse_reply, AssistantAction, AssistantReply};

/// The fixed instruction prompt sent with every request.
pub const INSTRUCTION_PROMPT: &str = "You are Neura, a warm, empathetic, and supportive AI \
companion for the Vitanova mental health app. Your goal is to provide helpful, comforting, \
and safe information. You are not a therapist, but a friendly guide. Your tone should be \
gentle and encouraging. If a user expresses distress, gently guide them towards the app's \
resources like screenings or booking an appointment. If they mention an emergency or \
self-harm, immediately respond with a JSON object where the 'action' is 'EMERGENCY_SOS'. \
Your response must be a JSON object with two keys: 'responseText' (your conversational \
reply) and 'action' (either 'none', 'goToScreening', 'goToBooking', or 'EMERGENCY_SOS').";

/// A provider of assistant replies. Implementations own transport,
/// authentication, and model choice; the core never sees any of it.
pub trait AssistantClient: Send + Sync {
    fn reply(
        &self,
        user_message: &str,
    ) -> impl Future<Output = Result<AssistantReply, AssistantError>> + Send;
}

/// The generic apologetic reply shown when the provider fails.
pub fn fallback_reply() -> AssistantReply {
    AssistantReply {
        response_text: "I'm sorry, I'm having a little trouble connecting right now. \
                        Please try again in a moment."
            .to_string(),
        action: AssistantAction::None,
    }
}
