pub mod env;

pub use env::{EnvConfig, CONVERSATION_KEY_VAR, MIN_SCORING_KEYS, SCORING_KEYS_VAR};
