use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;

use super::{Dialog, PERSONA_CONTEXT};

/// In-memory dialog registry. Entries are created lazily on first contact and
/// never removed; lifetime is the lifetime of the process.
///
/// Each dialog sits behind its own async mutex so a turn holds exclusive
/// access to its dialog across the model call, while turns for distinct
/// dialogs proceed concurrently. The outer map lock is only held for the
/// lookup itself.
pub struct DialogStore {
    inner: RwLock<HashMap<String, Arc<Mutex<Dialog>>>>,
    context: String,
}

impl DialogStore {
    pub fn new() -> Self {
        Self::with_context(PERSONA_CONTEXT)
    }

    pub fn with_context(context: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            context: context.into(),
        }
    }

    /// Returns the entry for `dialog_id`, creating a fresh dialog seeded with
    /// the store's persona context if none exists. Any identifier is valid;
    /// there is no "dialog not found" condition.
    pub fn entry(&self, dialog_id: &str) -> Arc<Mutex<Dialog>> {
        if let Some(existing) = self.inner.read().get(dialog_id) {
            return Arc::clone(existing);
        }
        let mut map = self.inner.write();
        Arc::clone(
            map.entry(dialog_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(Dialog::new(dialog_id, &self.context)))),
        )
    }

    pub fn get(&self, dialog_id: &str) -> Option<Arc<Mutex<Dialog>>> {
        self.inner.read().get(dialog_id).map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl Default for DialogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn entry_creates_once_and_reuses() {
        let store = DialogStore::new();
        assert!(store.get("d1").is_none());

        let first = store.entry("d1");
        first.lock().await.push_user("hello");

        let again = store.entry("d1");
        assert_eq!(again.lock().await.user_messages, vec!["hello"]);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn new_dialogs_share_the_persona_context() {
        let store = DialogStore::new();
        let a = store.entry("a");
        let b = store.entry("b");
        assert_eq!(a.lock().await.context, PERSONA_CONTEXT);
        assert_eq!(b.lock().await.context, PERSONA_CONTEXT);
    }
}
