use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use botornot::{
    BotornotError, DynLlmClient, IncomingMessage, LlmClient, LlmRequest, LlmResponse, Result,
    Scorer, ScoringPool, SelectionStrategy,
};

/// Always answers with the same text, counting invocations.
struct FixedClient {
    reply: String,
    calls: Arc<AtomicUsize>,
}

impl FixedClient {
    fn new(reply: &str, calls: Arc<AtomicUsize>) -> Self {
        Self {
            reply: reply.to_string(),
            calls,
        }
    }
}

#[async_trait]
impl LlmClient for FixedClient {
    async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(LlmResponse {
            content: self.reply.clone(),
            metadata: None,
        })
    }
}

fn pool_of(reply: &str, calls: &Arc<AtomicUsize>) -> ScoringPool {
    let clients: Vec<DynLlmClient> = (0..6)
        .map(|_| Arc::new(FixedClient::new(reply, Arc::clone(calls))) as DynLlmClient)
        .collect();
    ScoringPool::new(clients)
}

fn message(id: &str, text: &str) -> IncomingMessage {
    IncomingMessage {
        id: id.to_string(),
        dialog_id: "d1".to_string(),
        text: text.to_string(),
        participant_index: 0,
    }
}

#[tokio::test]
async fn score_echoes_identity_and_parses_probability() {
    let calls = Arc::new(AtomicUsize::new(0));
    let scorer = Scorer::new(pool_of("0.9", &calls));

    let prediction = scorer
        .score(message("p1", "you are a robot"))
        .await
        .unwrap();

    assert_eq!(prediction.message_id, "p1");
    assert_eq!(prediction.dialog_id, "d1");
    assert_eq!(prediction.participant_index, 0);
    assert_eq!(prediction.is_bot_probability, 0.9);
    assert!(!prediction.id.is_empty());
    assert_ne!(prediction.id, prediction.message_id);
}

#[tokio::test]
async fn prediction_ids_are_fresh_per_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let scorer = Scorer::new(pool_of("0.5", &calls));

    let first = scorer.score(message("p1", "hi")).await.unwrap();
    let second = scorer.score(message("p1", "hi")).await.unwrap();
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn malformed_response_is_a_hard_error() {
    let calls = Arc::new(AtomicUsize::new(0));
    let scorer = Scorer::new(pool_of("not a number", &calls));

    let err = scorer.score(message("p1", "hello")).await.unwrap_err();
    match err {
        BotornotError::MalformedScore { raw } => assert_eq!(raw, "not a number"),
        other => panic!("expected MalformedScore, got {other:?}"),
    }
}

#[tokio::test]
async fn out_of_range_values_are_not_clamped() {
    let calls = Arc::new(AtomicUsize::new(0));
    let scorer = Scorer::new(pool_of("1.5", &calls));

    let prediction = scorer.score(message("p1", "hello")).await.unwrap();
    assert_eq!(prediction.is_bot_probability, 1.5);
}

#[tokio::test]
async fn surrounding_whitespace_is_tolerated() {
    let calls = Arc::new(AtomicUsize::new(0));
    let scorer = Scorer::new(pool_of(" 0.25\n", &calls));

    let prediction = scorer.score(message("p1", "hello")).await.unwrap();
    assert_eq!(prediction.is_bot_probability, 0.25);
}

#[tokio::test]
async fn repeated_calls_invoke_the_model_each_time() {
    let calls = Arc::new(AtomicUsize::new(0));
    let scorer = Scorer::new(pool_of("0.1", &calls));

    for _ in 0..5 {
        scorer.score(message("p1", "same text")).await.unwrap();
    }
    // No caching by message content: five calls, five invocations.
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn selection_strategy_is_pluggable() {
    struct AlwaysLast;
    impl SelectionStrategy for AlwaysLast {
        fn choose(&self, pool_size: usize) -> usize {
            pool_size - 1
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let mut clients: Vec<DynLlmClient> = (0..5)
        .map(|_| Arc::new(FixedClient::new("0.0", Arc::clone(&calls))) as DynLlmClient)
        .collect();
    clients.push(Arc::new(FixedClient::new("0.6", Arc::clone(&calls))));

    let scorer = Scorer::new(ScoringPool::with_strategy(clients, Box::new(AlwaysLast)));
    let prediction = scorer.score(message("p1", "hello")).await.unwrap();
    assert_eq!(prediction.is_bot_probability, 0.6);
}
