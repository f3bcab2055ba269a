use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use folio::domain::config::AppConfig;
use folio_server::Server;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn server() -> Server {
    Server::builder().config(AppConfig::default()).build().await.expect("server over mem://")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("infallible router");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("read body").to_bytes();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn john_smith() -> Value {
    json!({
        "name": "John Smith",
        "email": "john.smith@example.com",
        "subject": "Business Inquiry",
        "message": "I would like to discuss a potential project."
    })
}

#[tokio::test]
async fn contact_round_trip() {
    let app = server().await.router();

    let (status, stored) = send(&app, post_json("/api/portfolio/contact", &john_smith())).await;
    assert_eq!(status, StatusCode::OK);
    for field in ["name", "email", "subject", "message"] {
        assert_eq!(stored[field], john_smith()[field]);
    }
    assert!(stored["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(stored["timestamp"].is_string());

    let (status, listed) = send(&app, get("/api/portfolio/contact/messages")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed[0]["id"], stored["id"]);
    assert_eq!(listed[0]["name"], "John Smith");
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let app = server().await.router();

    let (status, listed) = send(&app, get("/api/portfolio/contact/messages")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn invalid_submission_is_rejected_with_every_field() {
    let app = server().await.router();
    let invalid = json!({ "name": "", "email": "invalid-email", "subject": "", "message": "" });

    let (status, body) = send(&app, post_json("/api/portfolio/contact", &invalid)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<_> =
        body["detail"].as_array().expect("field list").iter().map(|e| e["field"].clone()).collect();
    assert_eq!(fields, [json!("name"), json!("email"), json!("subject"), json!("message")]);

    let (_, listed) = send(&app, get("/api/portfolio/contact/messages")).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn client_cannot_choose_id_or_timestamp() {
    let app = server().await.router();
    let mut body = john_smith();
    body["id"] = json!("chosen-by-client");
    body["timestamp"] = json!("2001-01-01T00:00:00Z");

    let (status, stored) = send(&app, post_json("/api/portfolio/contact", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(stored["id"], "chosen-by-client");
    assert_ne!(stored["timestamp"], "2001-01-01T00:00:00Z");
}

#[tokio::test]
async fn undecodable_bodies_are_classified() {
    let app = server().await.router();

    let malformed = Request::post("/api/portfolio/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .expect("request");
    let (status, body) = send(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    let (status, body) =
        send(&app, post_json("/api/portfolio/contact", &json!({ "name": "No Email" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let untyped = Request::post("/api/portfolio/contact")
        .body(Body::from(john_smith().to_string()))
        .expect("request");
    let (status, _) = send(&app, untyped).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn store_failure_is_reported() {
    let server = server().await;
    server
        .state()
        .database
        .query("DEFINE FIELD OVERWRITE name ON contact_message TYPE int")
        .await
        .expect("redefine field")
        .check()
        .expect("redefine field");
    let app = server.router();

    let (status, body) = send(&app, post_json("/api/portfolio/contact", &john_smith())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body["detail"].as_str().expect("string detail");
    assert!(detail.starts_with("Failed to save message: "), "{detail}");
}

#[tokio::test]
async fn portfolio_content_is_served() {
    let app = server().await.router();

    let (status, body) = send(&app, get("/api/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Folio Portfolio API" }));

    let (status, info) = send(&app, get("/api/portfolio/personal-info")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(info["availability_status"].is_string());

    let (status, about) = send(&app, get("/api/portfolio/about")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(about["stats"]["business_growth"]["value"], "25%");

    for (uri, len) in
        [("/api/portfolio/skills", 3), ("/api/portfolio/experience", 2), ("/api/portfolio/projects", 3)]
    {
        let (status, list) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(list.as_array().map(Vec::len), Some(len), "{uri}");
    }
}

#[tokio::test]
async fn health_reports_store_status() {
    let app = server().await.router();

    let response = app.clone().oneshot(get("/health")).await.expect("infallible router");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store, no-cache, must-revalidate")
    );

    let (_, body) = send(&app, get("/health")).await;
    assert_eq!(body["status"], "up");
    assert_eq!(body["database"], "up");
}

#[tokio::test]
async fn wildcard_cors_answers_preflight() {
    let app = server().await.router();
    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/portfolio/contact")
        .header(header::ORIGIN, "https://visitor.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .expect("request");

    let response = app.oneshot(preflight).await.expect("infallible router");
    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn explicit_origins_allow_credentials() {
    let mut cfg = AppConfig::default();
    cfg.server.cors.allowed_origins = vec!["https://folio.example.com".to_owned()];
    let app = Server::builder().config(cfg).build().await.expect("server").router();

    let request = Request::get("/api/")
        .header(header::ORIGIN, "https://folio.example.com")
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("infallible router");
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("https://folio.example.com")
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).and_then(|v| v.to_str().ok()),
        Some("true")
    );

    let foreign = Request::get("/api/")
        .header(header::ORIGIN, "https://elsewhere.example.com")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(foreign).await.expect("infallible router");
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn docs_are_served() {
    let app = server().await.router();
    let response = app.oneshot(get("/docs")).await.expect("infallible router");
    assert_eq!(response.status(), StatusCode::OK);
}
