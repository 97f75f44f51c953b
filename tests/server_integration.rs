//! End-to-end tests for the ask endpoint over a real socket.

mod common;

use std::time::Duration;

use common::{Outcome, StubProvider, TestServer};
use interview_assist::ai::{build_prompt, GenerateContentResponse};
use interview_assist::answer::AnswerKind;
use interview_assist::server::ASK_PATH;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn post(server: &TestServer, body: &Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(server.url(ASK_PATH))
        .json(body)
        .send()
        .await
        .expect("request failed");
    let status = response.status();
    let json = response.json().await.expect("response is not JSON");
    (status, json)
}

#[tokio::test]
async fn test_root_reports_running() {
    let server = TestServer::start(StubProvider::text("unused")).await;

    let response = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.text().await.unwrap(),
        "AI Interview Helper Backend Running"
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_empty_question_is_rejected_without_model_call() {
    let provider = StubProvider::text("unused");
    let server = TestServer::start(provider.clone()).await;

    let (status, body) = post(&server, &json!({"question": "", "type": "tech"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid question"}));
    assert_eq!(provider.calls(), 0);

    server.shutdown().await;
}

#[tokio::test]
async fn test_non_string_question_is_rejected() {
    let provider = StubProvider::text("unused");
    let server = TestServer::start(provider.clone()).await;

    for body in [json!({"question": 12}), json!({"type": "dsa"}), json!([])] {
        let (status, body) = post(&server, &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid question");
    }
    assert_eq!(provider.calls(), 0);

    server.shutdown().await;
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let server = TestServer::start(StubProvider::text("unused")).await;

    let response = reqwest::Client::new()
        .post(server.url(ASK_PATH))
        .header("content-type", "application/json")
        .body("{ question: ")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Invalid question"}));

    server.shutdown().await;
}

#[tokio::test]
async fn test_tech_answer_is_normalized() {
    let provider = StubProvider::text("Recursion is when a function calls itself.\r\n\r\n\r\n\r\nBase case stops it.");
    let server = TestServer::start(provider.clone()).await;

    let (status, body) = post(
        &server,
        &json!({"question": "Explain recursion", "type": "tech"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"answer": "Recursion is when a function calls itself.\n\nBase case stops it."})
    );
    assert_eq!(
        provider.prompts(),
        vec![build_prompt(AnswerKind::Tech, "Explain recursion")]
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_behavioral_is_default_and_structured() {
    let provider = StubProvider::text(
        "**Situation:** I was on a team\n**Task:** ship a feature\n**Action:** wrote code\n**Result:** shipped on time",
    );
    let server = TestServer::start(provider.clone()).await;

    let (status, body) = post(&server, &json!({"question": "Tell me about a deadline"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["structured"],
        json!({
            "situation": "I was on a team",
            "task": "ship a feature",
            "action": "wrote code",
            "result": "shipped on time"
        })
    );
    assert!(body["answer"].as_str().unwrap().starts_with("**Situation:**"));
    assert_eq!(
        provider.prompts()[0],
        build_prompt(AnswerKind::Behavioral, "Tell me about a deadline")
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_type_falls_back_to_behavioral() {
    let provider = StubProvider::text("Situation: s\nTask: t\nAction: a\nResult: r");
    let server = TestServer::start(provider.clone()).await;

    let (status, body) = post(&server, &json!({"question": "q", "type": "haiku"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["structured"]["result"], "r");
    assert_eq!(
        provider.prompts()[0],
        build_prompt(AnswerKind::Behavioral, "q")
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_dsa_json_is_decoded() {
    let raw = r#"{"type":"dsa","explanation":{"approach":"Hash map","algorithm":["Scan"],"edgeCases":["Empty"]},"code":{"language":"python","content":"pass"},"complexity":{"time":"O(n)","space":"O(n)"}}"#;
    let server = TestServer::start(StubProvider::text(raw)).await;

    let (status, body) = post(&server, &json!({"question": "Two sum", "type": "dsa"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "dsa");
    assert_eq!(body["explanation"]["approach"], "Hash map");
    assert_eq!(body["explanation"]["edgeCases"], json!(["Empty"]));
    assert_eq!(body["code"]["language"], "python");
    assert_eq!(body["complexity"]["time"], "O(n)");
    assert_eq!(body["rawAnswer"], raw);

    server.shutdown().await;
}

#[tokio::test]
async fn test_dsa_non_json_degrades_to_raw() {
    let server = TestServer::start(StubProvider::text("Use two pointers from both ends.")).await;

    let (status, body) = post(&server, &json!({"question": "Two sum", "type": "dsa"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"type": "dsa", "rawAnswer": "Use two pointers from both ends."})
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_sql_json_is_decoded() {
    let raw = "```json\n{\"type\":\"sql\",\"query\":\"SELECT 1\",\"explanation\":\"constant\",\"complexity\":\"O(1)\"}\n```";
    let server = TestServer::start(StubProvider::text(raw)).await;

    let (status, body) = post(&server, &json!({"question": "Select one", "type": "sql"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "type": "sql",
            "query": "SELECT 1",
            "explanation": "constant",
            "complexity": "O(1)",
            "rawAnswer": raw
        })
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_dsa_object_is_passed_through_as_sent() {
    let raw = r#"{"type":"dsa","explanation":{"approach":"Min-heap of size k"},"complexity":"O(n log k) time, O(k) space","followUp":"streaming input"}"#;
    let server = TestServer::start(StubProvider::text(raw)).await;

    let (status, body) = post(&server, &json!({"question": "Top k", "type": "dsa"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "type": "dsa",
            "explanation": {"approach": "Min-heap of size k"},
            "complexity": "O(n log k) time, O(k) space",
            "followUp": "streaming input",
            "rawAnswer": raw
        })
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_non_object_json_degrades_to_raw() {
    for (kind, raw) in [("sql", r#"["SELECT 1","constant","O(1)"]"#), ("dsa", "[]"), ("sql", "7")] {
        let server = TestServer::start(StubProvider::text(raw)).await;

        let (status, body) = post(&server, &json!({"question": "q", "type": kind})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"type": kind, "rawAnswer": raw}));

        server.shutdown().await;
    }
}

#[tokio::test]
async fn test_empty_model_response_is_503() {
    let provider = StubProvider::new(vec![Outcome::Response(GenerateContentResponse::default())]);
    let server = TestServer::start(provider).await;

    let (status, body) = post(&server, &json!({"question": "q", "type": "tech"})).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "AI response empty"}));

    server.shutdown().await;
}

#[tokio::test]
async fn test_overload_recovers_after_retries() {
    let provider = StubProvider::new(vec![
        Outcome::Status(503),
        Outcome::Status(503),
        Outcome::Text("Recovered".to_string()),
    ]);
    let server = TestServer::start(provider.clone()).await;

    let (status, body) = post(&server, &json!({"question": "q", "type": "tech"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"answer": "Recovered"}));
    assert_eq!(provider.calls(), 3);
    assert_eq!(server.delay.waits(), 2);

    server.shutdown().await;
}

#[tokio::test]
async fn test_persistent_overload_is_busy() {
    let provider = StubProvider::new(vec![Outcome::Status(503)]);
    let server = TestServer::start(provider.clone()).await;

    let (status, body) = post(&server, &json!({"question": "q", "type": "tech"})).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "AI model busy. Try again shortly."}));
    assert_eq!(provider.calls(), 3);
    assert_eq!(server.delay.waits(), 2);

    server.shutdown().await;
}

#[tokio::test]
async fn test_other_failures_are_500_without_detail() {
    for outcome in [Outcome::Status(401), Outcome::Transport] {
        let provider = StubProvider::new(vec![outcome]);
        let server = TestServer::start(provider.clone()).await;

        let (status, body) = post(&server, &json!({"question": "q"})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to fetch response"}));
        assert_eq!(provider.calls(), 1);
        assert_eq!(server.delay.waits(), 0);

        server.shutdown().await;
    }
}

#[tokio::test]
async fn test_cors_preflight_is_allowed() {
    let server = TestServer::start(StubProvider::text("unused")).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, server.url(ASK_PATH))
        .header("origin", "chrome-extension://abcdefg")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let provider = StubProvider::text("Same answer");
    let server = TestServer::start(provider.clone()).await;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = client.clone();
        let url = server.url(ASK_PATH);
        handles.push(tokio::spawn(async move {
            let response = client
                .post(url)
                .json(&json!({"question": format!("question {i}"), "type": "tech"}))
                .send()
                .await
                .unwrap();
            let status = response.status();
            let body: Value = response.json().await.unwrap();
            (status, body)
        }));
    }

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"answer": "Same answer"}));
    }
    assert_eq!(provider.calls(), 8);

    server.shutdown().await;
}

#[tokio::test]
async fn test_server_stops_on_shutdown() {
    let server = TestServer::start(StubProvider::text("unused")).await;
    let addr = server.addr;

    server.shutdown().await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(tokio::net::TcpStream::connect(addr).await.is_err());
}
