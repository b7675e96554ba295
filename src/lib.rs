pub mod config;
pub mod dialog;
pub mod error;
pub mod llm;
pub mod message;
pub mod score;
pub mod utils;

pub use config::EnvConfig;
pub use dialog::{
    Dialog, DialogStore, HistoryFormat, JsonHistoryFormat, TurnHandler, PERSONA_CONTEXT,
};
pub use error::{BotornotError, Result};
#[cfg(feature = "gemini-client")]
pub use llm::GeminiClient;
pub use llm::{DynLlmClient, LlmClient, LlmRequest, LlmResponse, LocalEchoClient};
pub use message::{IncomingMessage, Prediction, TurnRequest, TurnResponse};
pub use score::{Scorer, ScoringPool, SelectionStrategy, UniformRandom};
pub use utils::LoggingConfig;
