use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use services::explanation::prompts::EXPLAIN_FALLBACK;
use services::{
    Explanation, ExplanationFeed, ExplanationKind, ExplanationModels, ExplanationService,
    GenerationError, GenerationRequest, TextGenerator,
};
use tokio::sync::oneshot;

/// Answers with "about {topic}", optionally holding a topic until released.
#[derive(Default)]
struct GatedGenerator {
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl GatedGenerator {
    fn hold(&self, topic: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(topic.to_owned(), rx);
        tx
    }
}

fn topic_of(prompt: &str) -> String {
    prompt
        .split('"')
        .nth(1)
        .unwrap_or_default()
        .to_owned()
}

#[async_trait]
impl TextGenerator for GatedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let topic = topic_of(&request.prompt);
        let gate = self.gates.lock().unwrap().remove(&topic);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(format!("about {topic}"))
    }
}

struct DownGenerator;

#[async_trait]
impl TextGenerator for DownGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Err(GenerationError::EmptyResponse)
    }
}

fn feed_with(generator: Arc<dyn TextGenerator>) -> ExplanationFeed {
    let service = ExplanationService::new(generator, ExplanationModels::default());
    ExplanationFeed::new(Arc::new(service))
}

#[tokio::test]
async fn latest_issued_request_wins_when_older_arrives_late() {
    let generator = Arc::new(GatedGenerator::default());
    let release_x = generator.hold("X");
    let feed = feed_with(generator.clone());

    let x = feed.request(ExplanationKind::Explain, "X", "ctx");
    let y = feed.request(ExplanationKind::Explain, "Y", "ctx");

    let (x_out, y_out) = tokio::join!(x, async {
        let out = y.await;
        let _ = release_x.send(());
        out
    });

    assert!(x_out.is_none(), "stale response must be dropped");
    let y_entry = y_out.expect("latest response accepted");
    assert_eq!(y_entry.topic, "Y");
    assert_eq!(y_entry.explanation.text(), "about Y");
}

#[tokio::test]
async fn in_order_responses_keep_the_last_one() {
    let feed = feed_with(Arc::new(GatedGenerator::default()));

    let first = feed
        .request(ExplanationKind::Explain, "A", "ctx")
        .await
        .expect("accepted");
    assert_eq!(first.topic, "A");
    let first_ticket = first.ticket;
    let second = feed.request(ExplanationKind::Chunk, "B", "ctx").await;
    let second = second.expect("accepted");
    assert_eq!(second.kind, ExplanationKind::Chunk);
    assert_eq!(second.topic, "B");
    assert!(second.ticket > first_ticket);
}

#[tokio::test]
async fn issuing_a_newer_request_before_polling_drops_the_older_one() {
    let feed = feed_with(Arc::new(GatedGenerator::default()));

    let older = feed.request(ExplanationKind::Explain, "Old", "ctx");
    let newer = feed.request(ExplanationKind::Chunk, "New", "ctx");

    assert!(older.await.is_none());
    assert_eq!(newer.await.map(|e| e.topic), Some("New".to_owned()));
}

#[tokio::test]
async fn endpoint_failure_reaches_the_panel_as_fallback() {
    let feed = feed_with(Arc::new(DownGenerator));
    let entry = feed
        .request(ExplanationKind::Explain, "Goniometry Lab", "ctx")
        .await
        .expect("fallback is still an answer");
    assert_eq!(entry.explanation, Explanation::Fallback(EXPLAIN_FALLBACK));
}
