//! Integration test — build the router with a fake completion provider and
//! drive it with `oneshot` requests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use juris_api::{AppState, config::ApiConfig};
use juris_core::llm::{CompletionProvider, CompletionRequest, LlmConfig, LlmError};
use juris_core::models::Role;
use juris_core::search::{GeneratorConfig, MockResultSource};
use serde_json::{Value, json};
use tower::ServiceExt;

/// What the fake provider answers with.
#[derive(Clone)]
enum Reply {
    Text(&'static str),
    Empty,
    Fail(&'static str),
}

struct FakeProvider {
    reply: Reply,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl FakeProvider {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl CompletionProvider for FakeProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<Option<String>, LlmError> {
        self.calls.lock().expect("lock").push(request);
        match &self.reply {
            Reply::Text(t) => Ok(Some((*t).to_string())),
            Reply::Empty => Ok(None),
            Reply::Fail(body) => Err(LlmError::Status {
                status: 500,
                body: (*body).to_string(),
            }),
        }
    }

    fn is_configured(&self) -> bool {
        true
    }
}

fn app(provider: Arc<FakeProvider>) -> Router {
    let config = ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        llm: LlmConfig::default(),
        generator: GeneratorConfig::default(),
        wasm_pkg_dir: PathBuf::from("does-not-exist"),
    };
    let state = AppState {
        results: Arc::new(MockResultSource::new(config.generator)),
        config,
        provider,
    };
    juris_api::router(state)
}

async fn post_chat(app: Router, body: String) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request");
    let resp = app.oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("parse JSON");
    (status, json)
}

#[tokio::test]
async fn single_court_scenario_returns_three_results() {
    let provider = FakeProvider::new(Reply::Text("O prazo recursal é de 15 dias úteis."));
    let body = json!({
        "messages": [{"role": "user", "content": "prazo recursal"}],
        "courts": ["STF"]
    });

    let (status, json) = post_chat(app(provider.clone()), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "O prazo recursal é de 15 dias úteis.");
    let results = json["results"].as_array().expect("results array");
    assert_eq!(results.len(), 3);
    let kinds: Vec<&str> = results.iter().map(|r| r["type"].as_str().expect("type")).collect();
    assert_eq!(kinds, vec!["ruling-summary", "binding-thesis", "case-law"]);
    assert!(results.iter().all(|r| r["court"] == "STF"));

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.model, "gpt-4-turbo-preview");
    assert_eq!(call.max_tokens, 1500);
    assert!((call.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(call.messages.len(), 2);
    assert_eq!(call.messages[0].role, Role::System);
    assert_eq!(call.messages[1].role, Role::User);
    assert!(call.messages[1].content.starts_with("prazo recursal\n\nResultados encontrados:\n1. STF - Súmula: "));
    for r in results {
        let title = r["title"].as_str().expect("title");
        assert!(call.messages[1].content.contains(title), "prompt missing {title}");
    }
}

#[tokio::test]
async fn omitted_courts_cover_whole_catalog() {
    let provider = FakeProvider::new(Reply::Text("ok"));
    let body = json!({"messages": [{"role": "user", "content": "férias"}]});

    let (status, json) = post_chat(app(provider), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"].as_array().expect("array").len(), 14);
}

#[tokio::test]
async fn empty_courts_array_means_all_courts() {
    let provider = FakeProvider::new(Reply::Text("ok"));
    let body = json!({"messages": [{"role": "user", "content": "x"}], "courts": []});

    let (status, json) = post_chat(app(provider), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"].as_array().expect("array").len(), 14);
}

#[tokio::test]
async fn missing_messages_is_rejected_without_provider_call() {
    let provider = FakeProvider::new(Reply::Text("ok"));

    let (status, json) = post_chat(app(provider.clone()), json!({"courts": ["STF"]}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Mensagens inválidas");
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn non_array_messages_is_rejected() {
    let provider = FakeProvider::new(Reply::Text("ok"));

    let (status, json) =
        post_chat(app(provider.clone()), json!({"messages": "oi"}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Mensagens inválidas");
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn invalid_json_is_rejected() {
    let provider = FakeProvider::new(Reply::Text("ok"));

    let (status, json) = post_chat(app(provider.clone()), "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Mensagens inválidas");
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn unknown_court_is_rejected() {
    let provider = FakeProvider::new(Reply::Text("ok"));
    let body = json!({"messages": [{"role": "user", "content": "x"}], "courts": ["STM"]});

    let (status, json) = post_chat(app(provider.clone()), body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Tribunais inválidos");
    assert!(json["details"].as_str().expect("details").contains("STM"));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn provider_failure_returns_500_with_details() {
    let provider = FakeProvider::new(Reply::Fail("upstream exploded"));
    let body = json!({"messages": [{"role": "user", "content": "x"}]});

    let (status, json) = post_chat(app(provider), body.to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Erro ao processar solicitação");
    assert!(
        json["details"].as_str().expect("details").contains("upstream exploded"),
        "details: {}",
        json["details"]
    );
}

#[tokio::test]
async fn empty_provider_reply_uses_fallback() {
    let provider = FakeProvider::new(Reply::Empty);
    let body = json!({"messages": [{"role": "user", "content": "x"}], "courts": ["TJ"]});

    let (status, json) = post_chat(app(provider), body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Desculpe, não consegui processar sua solicitação.");
    assert_eq!(json["results"].as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn earlier_history_is_forwarded_unchanged() {
    let provider = FakeProvider::new(Reply::Text("ok"));
    let body = json!({
        "messages": [
            {"role": "user", "content": "o que é usucapião?"},
            {"role": "assistant", "content": "É um modo de aquisição da propriedade."},
            {"role": "user", "content": "e o prazo?"}
        ],
        "courts": ["STJ"]
    });

    let (status, _) = post_chat(app(provider.clone()), body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let calls = provider.calls();
    let messages = &calls[0].messages;
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[1].content, "o que é usucapião?");
    assert_eq!(messages[2].role, Role::Assistant);
    assert_eq!(messages[2].content, "É um modo de aquisição da propriedade.");
    assert!(messages[3].content.starts_with("e o prazo?\n\n"));
}

#[tokio::test]
async fn empty_history_is_accepted_with_empty_query() {
    let provider = FakeProvider::new(Reply::Text("ok"));

    let (status, json) = post_chat(
        app(provider.clone()),
        json!({"messages": [], "courts": ["TST"]}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["results"][1]["title"], "Acórdão sobre ");
    assert_eq!(provider.calls().len(), 1);
}

#[tokio::test]
async fn courts_endpoint_lists_catalog() {
    let provider = FakeProvider::new(Reply::Text("ok"));
    let req = Request::builder()
        .uri("/api/courts")
        .body(Body::empty())
        .expect("request");

    let resp = app(provider).oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&bytes).expect("parse JSON");
    let codes: Vec<&str> = json
        .as_array()
        .expect("array")
        .iter()
        .map(|c| c["code"].as_str().expect("code"))
        .collect();
    assert_eq!(codes, vec!["STF", "STJ", "TST", "TRF", "TRT", "TJ"]);
}

#[tokio::test]
async fn health_endpoint_does_not_call_provider() {
    let provider = FakeProvider::new(Reply::Fail("should not be called"));
    let req = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .expect("request");

    let resp = app(provider.clone()).oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&bytes).expect("parse JSON");
    assert!(
        json["greeting"]
            .as_str()
            .expect("greeting")
            .starts_with("Hello from juris_core v")
    );
    assert_eq!(json["providerConfigured"], true);
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn index_serves_chat_page() {
    let provider = FakeProvider::new(Reply::Text("ok"));
    let req = Request::builder().uri("/").body(Body::empty()).expect("request");

    let resp = app(provider).oneshot(req).await.expect("response");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let html = String::from_utf8(bytes.to_vec()).expect("utf-8");
    assert!(html.contains("Agente Jurídico IA"));
    assert!(html.contains("/pkg/juris_wasm.js"));
}
