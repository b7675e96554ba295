use crate::error::{BotornotError, Result};
use std::env;

/// Environment variable holding the conversation client credential.
pub const CONVERSATION_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable holding the scoring credential pool, comma-separated.
pub const SCORING_KEYS_VAR: &str = "GEMINI_SCORING_KEYS";

/// Scoring traffic is spread over at least this many upstream credentials.
pub const MIN_SCORING_KEYS: usize = 6;

pub struct EnvConfig;

impl EnvConfig {
    pub fn get_env(key: &str) -> Result<String> {
        env::var(key).map_err(|_| {
            BotornotError::Config(format!(
                "environment variable `{key}` is not set; set it in .env or the process environment"
            ))
        })
    }

    pub fn get_env_optional(key: &str) -> Option<String> {
        env::var(key).ok()
    }

    /// Credential for the conversational client.
    pub fn conversation_key() -> Result<String> {
        Self::get_env(CONVERSATION_KEY_VAR)
    }

    /// Credential pool for the scoring client: comma-separated, entries
    /// trimmed, empty entries dropped. Fewer than [`MIN_SCORING_KEYS`]
    /// usable entries is a configuration error.
    pub fn scoring_keys() -> Result<Vec<String>> {
        let raw = Self::get_env(SCORING_KEYS_VAR)?;
        Self::parse_scoring_keys(&raw)
    }

    pub fn parse_scoring_keys(raw: &str) -> Result<Vec<String>> {
        let keys: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        if keys.len() < MIN_SCORING_KEYS {
            return Err(BotornotError::Config(format!(
                "`{SCORING_KEYS_VAR}` holds {} credential(s), need at least {MIN_SCORING_KEYS}",
                keys.len()
            )));
        }
        Ok(keys)
    }

    pub fn is_debug_mode() -> bool {
        env::var("BOTORNOT_DEBUG").is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_empty_entries() {
        let keys = EnvConfig::parse_scoring_keys("k1, k2 ,, k3,k4 , k5,k6,").unwrap();
        assert_eq!(keys, vec!["k1", "k2", "k3", "k4", "k5", "k6"]);
    }

    #[test]
    fn parse_rejects_short_pools() {
        let result = EnvConfig::parse_scoring_keys("only,three,keys");
        assert!(matches!(result, Err(BotornotError::Config(_))));
    }

    #[test]
    fn missing_env_var_is_a_config_error() {
        let result = EnvConfig::get_env("BOTORNOT_DOES_NOT_EXIST");
        assert!(matches!(result, Err(BotornotError::Config(_))));
    }
}
