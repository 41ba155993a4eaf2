mod common;

use agent_os::{app, AppState, ConfigStore, MemoryKnowledgeStore, ProviderDefaults};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_tenant_count() {
    let resp = app(common::state()).oneshot(common::get("/health", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["tenants"], 2);
}

#[tokio::test]
async fn organization_for_bound_tenant_hides_credentials() {
    let resp = app(common::state())
        .oneshot(common::get("/api/v1/organization", Some("acme")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["mode"], "tenant");
    assert_eq!(data["name"], "acme");
    assert_eq!(data["llm_endpoint"], "https://acme.openai.example");
    assert_eq!(data["doc_ids"]["business"], serde_json::json!(["b1", "b2"]));
    let rendered = body.to_string();
    assert!(!rendered.contains("llm-key"));
    assert!(!rendered.contains("search-key"));
}

#[tokio::test]
async fn organization_in_simple_mode() {
    let app = app(common::state());
    let body = common::body_json(
        app.clone()
            .oneshot(common::get("/api/v1/organization", Some("ghost")))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(body["data"]["mode"], "simple");
    assert_eq!(body["data"]["requested_tenant"], "ghost");

    let body = common::body_json(app.oneshot(common::get("/api/v1/organization", None)).await.unwrap()).await;
    assert_eq!(body["data"]["mode"], "simple");
    assert!(body["data"].get("requested_tenant").is_none());
}

#[tokio::test]
async fn profile_blueprint_is_scoped_to_tenant_documents() {
    let resp = app(common::state())
        .oneshot(common::get("/api/v1/profiles/content_creator", Some("acme")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["tenant"], "acme");
    assert_eq!(data["document_category"], "business");
    assert_eq!(data["knowledge"]["allowed_doc_ids"], serde_json::json!(["g1", "b1", "b2"]));
    assert_eq!(data["model"]["provider"], "azure_openai");
    assert_eq!(data["model"]["scope"], "tenant");
    assert_eq!(data["embedder"]["id"], "text-embedding-3-small");
    assert!(data["instructions"].as_str().unwrap().contains("Content Creator"));
    assert!(!body.to_string().contains("llm-key"));
}

#[tokio::test]
async fn profile_in_simple_mode_is_unrestricted() {
    let resp = app(common::state())
        .oneshot(common::get("/api/v1/profiles/humanizer", None))
        .await
        .unwrap();
    let body = common::body_json(resp).await;
    assert!(body["data"]["tenant"].is_null());
    assert!(body["data"]["knowledge"]["allowed_doc_ids"].is_null());
    assert_eq!(body["data"]["model"]["provider"], "openai");
}

#[tokio::test]
async fn unknown_profile_is_surfaced_as_error() {
    let resp = app(common::state())
        .oneshot(common::get("/api/v1/profiles/lawyer", Some("acme")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(resp).await;
    assert_eq!(body["error"]["code"], "profile_not_implemented");
    assert!(body["error"]["message"].as_str().unwrap().contains("lawyer"));
}

#[tokio::test]
async fn list_profiles() {
    let resp = app(common::state()).oneshot(common::get("/api/v1/profiles", None)).await.unwrap();
    let body = common::body_json(resp).await;
    assert_eq!(body["meta"]["count"], 3);
    assert_eq!(body["data"][0]["profile"], "assist");
    assert_eq!(body["data"][0]["document_category"], "general");
}

#[tokio::test]
async fn assist_profile_is_scoped_to_general_documents() {
    let resp = app(common::state())
        .oneshot(common::get("/api/v1/profiles/assist", Some("acme")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_json(resp).await;
    assert_eq!(body["data"]["id"], "assist-agent");
    assert_eq!(body["data"]["tools"], serde_json::json!(["web_search"]));
    assert_eq!(body["data"]["knowledge"]["allowed_doc_ids"], serde_json::json!(["g1"]));
}

#[tokio::test]
async fn team_blueprint_composes_members_for_the_tenant() {
    let app = app(common::state());
    let body = common::body_json(app.clone().oneshot(common::get("/api/v1/teams", None)).await.unwrap()).await;
    assert_eq!(body["meta"]["count"], 1);
    assert_eq!(body["data"][0]["team"], "content_creator_humanizer");

    let resp = app
        .oneshot(common::get("/api/v1/teams/content_creator_humanizer", Some("acme")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["id"], "content-creator-humanizer-team");
    assert_eq!(data["tenant"], "acme");
    assert_eq!(data["members"][0]["id"], "content-creator-agent");
    assert_eq!(data["members"][0]["knowledge"]["allowed_doc_ids"], serde_json::json!(["g1", "b1", "b2"]));
    assert_eq!(data["members"][1]["id"], "humanizer-agent");
    assert_eq!(data["members"][1]["knowledge"]["allowed_doc_ids"], serde_json::json!(["g1", "q1"]));
    assert!(!body.to_string().contains("llm-key"));
}

#[tokio::test]
async fn unknown_team_is_not_found() {
    let resp = app(common::state())
        .oneshot(common::get("/api/v1/teams/marketing", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = common::body_json(resp).await;
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn search_without_query_uses_error_envelope() {
    let resp = app(common::state())
        .oneshot(common::get("/api/v1/knowledge/search", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(resp).await;
    assert_eq!(body["error"]["code"], "bad_request");
    assert!(body["error"]["message"].as_str().unwrap().contains("q"));
}

#[tokio::test]
async fn knowledge_search_respects_tenant_scope() {
    let knowledge = Arc::new(MemoryKnowledgeStore::new());
    knowledge.insert_with_id("g1", "voice.md", "brand voice").await;
    knowledge.insert_with_id("b1", "pricing.md", "brand pricing").await;
    knowledge.insert_with_id("x9", "other.md", "brand other").await;
    let state = AppState::new(common::store(), ProviderDefaults::default(), knowledge);
    let app = app(state);

    let body = common::body_json(
        app.clone()
            .oneshot(common::get("/api/v1/knowledge/search?q=brand&profile=content_creator", Some("acme")))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(body["meta"]["count"], 2);

    let body = common::body_json(
        app.oneshot(common::get("/api/v1/knowledge/search?q=brand", None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(body["meta"]["count"], 3);
}

fn multipart(files: &[(&str, &[u8])]) -> Request<Body> {
    let boundary = "agentosboundary";
    let mut body = Vec::new();
    for (name, content) in files {
        body.extend_from_slice(
            format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{n}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                b = boundary,
                n = name
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    Request::builder()
        .method("POST")
        .uri("/api/v1/knowledge/upload")
        .header("content-type", format!("multipart/form-data; boundary={}", boundary))
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn upload_reports_per_file_status() {
    let knowledge = Arc::new(MemoryKnowledgeStore::new());
    let state = AppState::new(ConfigStore::empty(), ProviderDefaults::default(), knowledge.clone());
    let resp = app(state)
        .oneshot(multipart(&[("notes.md", &b"# notes"[..]), ("virus.exe", &b"MZ"[..])]))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_json(resp).await;
    assert_eq!(body["data"]["ingested"], 1);
    assert_eq!(body["data"]["documents"][0]["status"], "ok");
    assert_eq!(body["data"]["documents"][1]["status"], "error");
    assert_eq!(knowledge.len().await, 1);
}

#[tokio::test]
async fn upload_rejects_too_many_files() {
    let files: Vec<(&str, &[u8])> = vec![
        ("1.txt", &b"a"[..]),
        ("2.txt", &b"b"[..]),
        ("3.txt", &b"c"[..]),
        ("4.txt", &b"d"[..]),
        ("5.txt", &b"e"[..]),
        ("6.txt", &b"f"[..]),
    ];
    let resp = app(common::state()).oneshot(multipart(&files)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
