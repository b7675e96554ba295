pub mod pool;

pub use pool::{ScoringPool, SelectionStrategy, UniformRandom};

use tracing::info;
use uuid::Uuid;

use crate::error::{BotornotError, Result};
use crate::llm::LlmRequest;
use crate::message::{IncomingMessage, Prediction};

/// Stateless bot-probability scorer. Every call picks a credential from the
/// pool, asks the model for a bare float verdict, and parses it strictly.
pub struct Scorer {
    pool: ScoringPool,
}

impl Scorer {
    pub fn new(pool: ScoringPool) -> Self {
        Self { pool }
    }

    fn classification_prompt(text: &str) -> String {
        format!(
            "You have to classify the message as a bot or human. \
             Here is the message: \"{text}\". \
             You have to answer with a number from 0 to 1, \
             where 0 is a human and 1 is a bot. \
             Answer with a single float number and no other text. \
             Your answer (only float number from 0 to 1): "
        )
    }

    /// Scores one message. Two calls with the same input are fully
    /// independent: fresh credential pick, fresh model invocation, no caching.
    ///
    /// The parsed value is returned as-is; an out-of-range number is accepted,
    /// while any non-numeric response is a [`BotornotError::MalformedScore`].
    pub async fn score(&self, msg: IncomingMessage) -> Result<Prediction> {
        let client = self.pool.pick()?;
        let prompt = Self::classification_prompt(&msg.text);
        let response = client.generate(LlmRequest::new(prompt)).await?;

        let raw = response.content.trim();
        let is_bot_probability: f64 = raw.parse().map_err(|_| BotornotError::MalformedScore {
            raw: raw.to_string(),
        })?;

        info!(
            dialog_id = %msg.dialog_id,
            probability = is_bot_probability,
            "scored message"
        );

        Ok(Prediction {
            id: Uuid::new_v4().to_string(),
            message_id: msg.id,
            dialog_id: msg.dialog_id,
            participant_index: msg.participant_index,
            is_bot_probability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_message_verbatim() {
        let prompt = Scorer::classification_prompt("you are a robot");
        assert!(prompt.contains("\"you are a robot\""));
        assert!(prompt.contains("only float number from 0 to 1"));
    }
}
