use crate::error::{BotornotError, Result};

use super::Dialog;

/// Serializes a dialog into the single text blob sent to the model.
///
/// The full structured state is rendered on every turn, so the prompt grows
/// linearly with the conversation. Known inefficiency, kept deliberately:
/// the model holds no session state of its own.
pub trait HistoryFormat: Send + Sync {
    fn render(&self, dialog: &Dialog) -> Result<String>;
}

/// Default format: the whole dialog record as one JSON object.
#[derive(Default, Clone)]
pub struct JsonHistoryFormat;

impl HistoryFormat for JsonHistoryFormat {
    fn render(&self, dialog: &Dialog) -> Result<String> {
        serde_json::to_string(dialog)
            .map_err(|e| BotornotError::Upstream(anyhow::anyhow!("history serialization: {e}")))
    }
}
