use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use serde_json::Value;

use examgen_server::{
    errors::AppResult,
    models::{domain::generation::TestType, dto::request::GenerateQuestionsRequest},
    services::{
        candidate_extractor::{ArrayLiteralExtractor, ResponseShapeAdapter},
        escape_repairer::repair_escapes,
        generation_gateway::GenerationGateway,
        question_pipeline::QuestionPipeline,
        structural_parser::parse_candidate,
    },
};

fn content_of(candidate: &str) -> String {
    let items = parse_candidate(candidate).expect("candidate should parse");
    items[0]["content"].as_str().unwrap().to_string()
}

#[test]
fn extraction_returns_exact_array_literal() {
    let payload = r#"[{"content":"Q","type":"mcq","options":[{"label":"A","text":"x"}]}]"#;
    let raw = format!("Sure, here you go: {} Hope that helps!", payload);

    assert_eq!(ArrayLiteralExtractor.extract_candidate(&raw), payload);
}

#[test]
fn repaired_inline_math_reads_back_once() {
    let candidate = r#"[{"content":"Evaluate \(x^2\) at \(x = 3\)"}]"#;
    assert!(serde_json::from_str::<Value>(candidate).is_err());

    let content = content_of(&repair_escapes(candidate));

    assert_eq!(content, r"Evaluate \(x^2\) at \(x = 3\)");
    assert_eq!(content.matches(r"\(").count(), 2);
}

#[test]
fn repair_is_idempotent() {
    let candidates = [
        r#"[{"content":"Evaluate \(x^2\)"}]"#,
        r#"[{"content":"Line one\nLine two with \"quotes\""}]"#,
        r#"[{"content":"Path C:\\temp and \\\\server"}]"#,
        r#"[{"content":"Set \{1, 2\} and \u00e9"}]"#,
    ];

    for candidate in candidates {
        let once = repair_escapes(candidate);
        let twice = repair_escapes(&once);

        let first: Value = serde_json::from_str(&once).unwrap();
        let second: Value = serde_json::from_str(&twice).unwrap();
        assert_eq!(first, second, "repair drifted for {}", candidate);
    }
}

struct SlowCountingGateway {
    calls: AtomicUsize,
}

#[async_trait]
impl GenerationGateway for SlowCountingGateway {
    async fn generate(&self, _prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(r#"[{"type":"frq","content":"Explain osmosis.","rubric":{"points":4,"criteria":["Defines osmosis"]}}]"#.to_string())
    }
}

fn request(topic: &str) -> GenerateQuestionsRequest {
    GenerateQuestionsRequest {
        topic: topic.to_string(),
        test_type: TestType::Frq,
        question_count: 1,
        difficulty: "intermediate".to_string(),
    }
}

#[tokio::test]
async fn concurrent_identical_requests_share_one_upstream_call() {
    let gateway = Arc::new(SlowCountingGateway {
        calls: AtomicUsize::new(0),
    });
    let pipeline = QuestionPipeline::new(gateway.clone());

    let (a, b, c) = tokio::join!(
        pipeline.generate(request("AP Biology osmosis")),
        pipeline.generate(request("AP Biology osmosis")),
        pipeline.generate(request("AP Biology osmosis")),
    );

    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    let (a, b, c) = (a.unwrap(), b.unwrap(), c.unwrap());
    assert_eq!(a.questions, b.questions);
    assert_eq!(b.questions, c.questions);
}

#[tokio::test]
async fn distinct_requests_are_not_coalesced() {
    let gateway = Arc::new(SlowCountingGateway {
        calls: AtomicUsize::new(0),
    });
    let pipeline = QuestionPipeline::new(gateway.clone());

    let (a, b) = tokio::join!(
        pipeline.generate(request("AP Biology osmosis")),
        pipeline.generate(request("AP Chemistry equilibrium")),
    );

    assert!(a.is_ok() && b.is_ok());
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn abandoned_request_does_not_serve_later_identical_request() {
    let gateway = Arc::new(SlowCountingGateway {
        calls: AtomicUsize::new(0),
    });
    let pipeline = QuestionPipeline::new(gateway.clone());

    let abandoned = tokio::time::timeout(
        Duration::from_millis(20),
        pipeline.generate(request("AP Biology osmosis")),
    )
    .await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_millis(300)).await;

    let batch = pipeline.generate(request("AP Biology osmosis")).await.unwrap();
    assert_eq!(batch.questions.len(), 1);
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
}
