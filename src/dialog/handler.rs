use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::llm::{DynLlmClient, LlmRequest};
use crate::message::{TurnRequest, TurnResponse};

use super::prompt::{HistoryFormat, JsonHistoryFormat};
use super::store::DialogStore;

/// Drives one conversation turn: record the incoming message, feed the whole
/// dialog to the model, record and return the reply.
pub struct TurnHandler {
    store: Arc<DialogStore>,
    client: DynLlmClient,
    format: Box<dyn HistoryFormat>,
}

impl TurnHandler {
    pub fn new(store: Arc<DialogStore>, client: DynLlmClient) -> Self {
        Self::with_format(store, client, Box::new(JsonHistoryFormat))
    }

    pub fn with_format(
        store: Arc<DialogStore>,
        client: DynLlmClient,
        format: Box<dyn HistoryFormat>,
    ) -> Self {
        Self {
            store,
            client,
            format,
        }
    }

    pub fn store(&self) -> &Arc<DialogStore> {
        &self.store
    }

    /// Handles one turn for `request.dialog_id`, creating the dialog on first
    /// contact. The dialog lock is held across the model call, so turns for
    /// the same dialog are serialized.
    ///
    /// On model failure the error propagates and the already-appended user
    /// message stays in the history: a retried turn sees it in the prompt
    /// instead of losing it.
    pub async fn handle_turn(&self, request: TurnRequest) -> Result<TurnResponse> {
        info!(
            dialog_id = %request.dialog_id,
            last_message_id = %request.last_message_id,
            "received message"
        );

        let entry = self.store.entry(&request.dialog_id);
        let mut dialog = entry.lock().await;

        dialog.push_user(request.last_msg_text);
        let history = self.format.render(&dialog)?;

        let response = self.client.generate(LlmRequest::new(history)).await?;
        dialog.push_bot(response.content.clone());

        info!(
            dialog_id = %request.dialog_id,
            history = %self.format.render(&dialog)?,
            "generated reply"
        );

        Ok(TurnResponse {
            new_msg_text: response.content,
            dialog_id: request.dialog_id,
        })
    }
}
