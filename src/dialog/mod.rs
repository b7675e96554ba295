pub mod handler;
pub mod prompt;
pub mod store;

pub use handler::TurnHandler;
pub use prompt::{HistoryFormat, JsonHistoryFormat};
pub use store::DialogStore;

use serde::{Deserialize, Serialize};

/// Instruction block seeded into every new dialog. The agent poses as a human
/// player in a human-or-not game: short, casual, lower-case replies, in the
/// language of the other participant.
pub const PERSONA_CONTEXT: &str = "You are a human taking part in a human-or-not \
guessing game, chatting with another participant. Stay in character as a human \
for the whole conversation. Answer with short, simple messages in lower case \
letters, the way people type in chats. Reply in the language your conversation \
partner uses, avoid complicated words and phrases, and keep your answers neither \
too long nor too short. Take the whole dialog history into account when answering.";

/// Accumulated state of one conversation. The two message sequences are
/// append-only; a bot message is appended only after the user message that
/// triggered it, so `bot_messages.len() <= user_messages.len()` always holds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Dialog {
    pub context: String,
    pub dialog_id: String,
    pub user_messages: Vec<String>,
    pub bot_messages: Vec<String>,
}

impl Dialog {
    pub fn new(dialog_id: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            dialog_id: dialog_id.into(),
            user_messages: Vec::new(),
            bot_messages: Vec::new(),
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.user_messages.push(text.into());
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.bot_messages.push(text.into());
    }

    /// Number of completed turns (user message paired with a reply).
    pub fn turns(&self) -> usize {
        self.bot_messages.len()
    }
}
