//! Integration tests for the retry executor.
//!
//! A scripted transport replays canned outcomes so that connection failures,
//! server errors and rate-limit headers can be exercised deterministically.

use std::collections::{HashMap, VecDeque};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Deserialize;
use woocommerce_api::clients::{
    Destination, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, RateLimiter,
    ReqwestTransport, Transport, TransportError, MAX_ATTEMPTS,
};
use woocommerce_api::{ClientConfig, ShopUrl};

// ============================================================================
// Test Doubles
// ============================================================================

type Outcome = Result<HttpResponse, TransportError>;

#[derive(Debug, Default)]
struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Outcome>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    fn new(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("script exhausted".into())))
    }
}

#[derive(Debug, Default)]
struct RecordingLimiter {
    consulted: AtomicUsize,
    seen: Mutex<Vec<HashMap<String, Vec<String>>>>,
}

impl RateLimiter for RecordingLimiter {
    fn delay_before_send(&self) -> Option<Duration> {
        self.consulted.fetch_add(1, Ordering::SeqCst);
        None
    }

    fn update(&self, headers: &HashMap<String, Vec<String>>) {
        self.seen.lock().unwrap().push(headers.clone());
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Tag {
    id: Option<u64>,
    name: Option<String>,
}

fn json(code: u16, body: &str) -> Outcome {
    Ok(HttpResponse::new(code, HashMap::new(), body.as_bytes().to_vec()))
}

fn client(outcomes: Vec<Outcome>) -> HttpClient<ScriptedTransport> {
    let config = ClientConfig::builder()
        .shop_url(ShopUrl::new("https://shop.example.com").unwrap())
        .retry_hold(Duration::ZERO)
        .build()
        .unwrap();
    HttpClient::new(&config, ScriptedTransport::new(outcomes))
}

fn get(client: &HttpClient<ScriptedTransport>, path: &str) -> HttpRequest {
    client
        .build_request::<(), ()>(HttpMethod::Get, path, None, None)
        .unwrap()
}

// ============================================================================
// Retry Tests
// ============================================================================

#[tokio::test]
async fn test_connection_error_then_success_retries_once() {
    let client = client(vec![
        Err(TransportError::Connection("connection refused".into())),
        json(200, r#"{"id":34,"name":"Leather"}"#),
    ]);
    let request = get(&client, "products/tags/34");

    let mut tag = Tag::default();
    let response = client
        .execute(&request, Destination::Json(&mut tag))
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(client.transport().calls(), 2);
    assert_eq!(
        tag,
        Tag {
            id: Some(34),
            name: Some("Leather".into())
        }
    );
}

#[tokio::test]
async fn test_timeout_then_success_retries_once() {
    let client = client(vec![Err(TransportError::Timeout), json(200, "[]")]);
    let request = get(&client, "products/tags");

    let mut tags: Vec<Tag> = vec![Tag::default()];
    client
        .execute(&request, Destination::Json(&mut tags))
        .await
        .unwrap();

    assert!(tags.is_empty());
    assert_eq!(client.transport().calls(), 2);
}

#[tokio::test]
async fn test_repeated_server_error_exhausts_attempts() {
    let body = r#"{"code":"internal_server_error","message":"Database gone","data":{"status":500}}"#;
    let client = client(vec![json(500, body), json(500, body)]);
    let request = get(&client, "orders");

    let error = client.send(&request).await.unwrap_err();

    assert_eq!(client.transport().calls(), MAX_ATTEMPTS as usize);
    let HttpError::AttemptsExhausted { attempts, last } = &error else {
        panic!("expected AttemptsExhausted, got {error:?}");
    };
    assert_eq!(*attempts, 2);

    let last = last.as_deref().unwrap();
    let api = last.api_error().unwrap();
    assert_eq!(api.status, 500);
    assert_eq!(api.code, "internal_server_error");
    assert_eq!(api.message, "Database gone");
    assert_eq!(error.api_error().map(|e| e.status), Some(500));
}

#[tokio::test]
async fn test_repeated_connection_error_keeps_last_transport_error() {
    let client = client(vec![
        Err(TransportError::Timeout),
        Err(TransportError::Connection("reset by peer".into())),
    ]);
    let request = get(&client, "orders");

    let error = client.send(&request).await.unwrap_err();

    assert_eq!(client.transport().calls(), 2);
    match error {
        HttpError::AttemptsExhausted {
            last: Some(last), ..
        } => assert!(matches!(*last, HttpError::Transport(TransportError::Connection(_)))),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_then_success() {
    let client = client(vec![json(503, ""), json(200, r#"{"id":1}"#)]);
    let request = get(&client, "products/tags/1");

    let mut tag = Tag::default();
    client
        .execute(&request, Destination::Json(&mut tag))
        .await
        .unwrap();

    assert_eq!(tag.id, Some(1));
    assert_eq!(client.transport().calls(), 2);
}

// ============================================================================
// Terminal Response Tests
// ============================================================================

/// Serves every connection a `201` whose body stops short of its
/// `Content-Length`, then hangs up. Returns the base URL and a request counter.
fn spawn_truncating_server() -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            read_request(&mut stream);
            counter.fetch_add(1, Ordering::SeqCst);
            let _ = stream.write_all(
                b"HTTP/1.1 201 Created\r\n\
                  Content-Type: application/json\r\n\
                  Content-Length: 200\r\n\r\n\
                  {\"id\":1",
            );
            let _ = stream.flush();
        }
    });

    (format!("http://{addr}"), requests)
}

fn read_request(stream: &mut TcpStream) {
    let mut reader = BufReader::new(stream);
    let mut content_length = 0;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            return;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }
    let mut body = vec![0; content_length];
    let _ = reader.read_exact(&mut body);
}

#[tokio::test]
async fn test_truncated_body_after_status_is_not_resent() {
    let (shop, requests) = spawn_truncating_server();
    let config = ClientConfig::builder()
        .shop_url(ShopUrl::new(shop.as_str()).unwrap())
        .retry_hold(Duration::ZERO)
        .build()
        .unwrap();
    let client = HttpClient::new(
        &config,
        ReqwestTransport::new(Some(Duration::from_secs(5))).unwrap(),
    );
    let request = client
        .build_request::<(), _>(
            HttpMethod::Post,
            "orders",
            None,
            Some(&serde_json::json!({"status": "pending"})),
        )
        .unwrap();

    let error = client.send(&request).await.unwrap_err();

    assert!(
        matches!(error, HttpError::Transport(TransportError::Body(_))),
        "unexpected error: {error:?}"
    );
    assert!(!error.is_retryable());
    assert_eq!(requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_scripted_body_failure_is_not_retried() {
    let client = client(vec![
        Err(TransportError::Body("connection closed before message completed".into())),
        json(201, r#"{"id":2}"#),
    ]);
    let request = get(&client, "orders/batch");

    let error = client.send(&request).await.unwrap_err();

    assert!(matches!(error, HttpError::Transport(TransportError::Body(_))));
    assert_eq!(client.transport().calls(), 1);
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let client = client(vec![json(
        404,
        r#"{"code":"woocommerce_rest_not_found","message":"Invalid ID.","data":{"status":404}}"#,
    )]);
    let request = get(&client, "orders/999");

    let error = client.send(&request).await.unwrap_err();

    assert_eq!(client.transport().calls(), 1);
    assert!(!error.is_retryable());
    let api = error.api_error().unwrap();
    assert!(api.is_not_found());
    assert_eq!(api.code, "woocommerce_rest_not_found");
    assert_eq!(api.message, "Invalid ID.");
    assert_eq!(api.method, HttpMethod::Get);
    assert_eq!(api.url, "https://shop.example.com/wp-json/wc/v3/orders/999");
}

#[tokio::test]
async fn test_client_error_with_unparseable_body() {
    let client = client(vec![json(401, "<html>Unauthorized</html>")]);
    let request = get(&client, "orders");

    let error = client.send(&request).await.unwrap_err();

    let api = error.api_error().unwrap();
    assert_eq!(api.status, 401);
    assert_eq!(api.code, "");
    assert_eq!(client.transport().calls(), 1);
}

#[tokio::test]
async fn test_blank_success_body_leaves_destination_untouched() {
    let client = client(vec![json(200, "  \n")]);
    let request = get(&client, "products/tags/5");

    let mut tag = Tag::default();
    let response = client
        .execute(&request, Destination::Json(&mut tag))
        .await
        .unwrap();

    assert!(response.is_body_blank());
    assert_eq!(tag, Tag::default());
}

#[tokio::test]
async fn test_undecodable_success_body_is_an_encoding_error() {
    let client = client(vec![json(200, "not json")]);
    let request = get(&client, "products/tags/5");

    let mut tag = Tag::default();
    let error = client
        .execute(&request, Destination::Json(&mut tag))
        .await
        .unwrap_err();

    assert!(matches!(error, HttpError::Encoding(_)));
    assert_eq!(client.transport().calls(), 1);
}

#[tokio::test]
async fn test_raw_destination_receives_body_bytes() {
    let body = r#"{"environment":{"version":"8.2.1"}}"#;
    let client = client(vec![json(200, body)]);
    let request = get(&client, "system_status");

    let mut sink: Vec<u8> = Vec::new();
    client
        .execute::<()>(&request, Destination::Raw(&mut sink))
        .await
        .unwrap();

    assert_eq!(sink, body.as_bytes());
}

// ============================================================================
// Rate Limiter Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limiter_is_consulted_and_updated_per_attempt() {
    let mut headers = HashMap::new();
    headers.insert("x-ratelimit-remaining".to_string(), vec!["12".to_string()]);

    let mut client = client(vec![
        json(502, ""),
        Ok(HttpResponse::new(200, headers, b"{}".to_vec())),
    ]);
    let limiter = Arc::new(RecordingLimiter::default());
    client.set_rate_limiter(limiter.clone());

    let request = get(&client, "coupons");
    let response = client.send(&request).await.unwrap();

    assert_eq!(limiter.consulted.load(Ordering::SeqCst), 2);
    let seen = limiter.seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1]["x-ratelimit-remaining"], vec!["12".to_string()]);
    assert_eq!(response.rate_limit.and_then(|r| r.remaining), Some(12));
}

#[tokio::test]
async fn test_transport_error_does_not_update_limiter() {
    let mut client = client(vec![Err(TransportError::Timeout), json(200, "{}")]);
    let limiter = Arc::new(RecordingLimiter::default());
    client.set_rate_limiter(limiter.clone());

    let request = get(&client, "coupons");
    client.send(&request).await.unwrap();

    assert_eq!(limiter.consulted.load(Ordering::SeqCst), 2);
    assert_eq!(limiter.seen.lock().unwrap().len(), 1);
}

// ============================================================================
// Blocking Use Tests
// ============================================================================

#[test]
fn test_executor_runs_under_block_on() {
    let client = client(vec![json(200, r#"{"id":9,"name":"Sale"}"#)]);
    let request = get(&client, "products/tags/9");

    let mut tag = Tag::default();
    let response =
        tokio_test::block_on(client.execute(&request, Destination::Json(&mut tag))).unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(tag.name.as_deref(), Some("Sale"));
}
