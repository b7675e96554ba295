use serde::{Deserialize, Serialize};

/// Incoming conversation turn. `last_message_id` is accepted and logged but
/// plays no part in turn handling.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TurnRequest {
    pub dialog_id: String,
    pub last_msg_text: String,
    pub last_message_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TurnResponse {
    pub new_msg_text: String,
    pub dialog_id: String,
}

/// A message submitted for bot-probability scoring.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IncomingMessage {
    pub id: String,
    pub dialog_id: String,
    pub text: String,
    pub participant_index: u32,
}

/// Scoring verdict for one message. `id` is freshly generated per call;
/// the remaining identity fields are echoed from the input.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub id: String,
    pub message_id: String,
    pub dialog_id: String,
    pub participant_index: u32,
    pub is_bot_probability: f64,
}
