use std::sync::Arc;

use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use super::*;
use crate::config::{Config, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS};
use crate::error_handling::ProbeError;
use crate::initialization::init_client;

fn test_prober(attempts: usize) -> HttpProber {
    let config = Config {
        timeout_seconds: 5,
        ..Default::default()
    };
    let client = init_client(&config).expect("client should build");
    HttpProber::new(client, attempts, 0)
}

/// Returns a local URL with nothing listening on it.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

#[tokio::test]
async fn test_probe_reports_status_and_final_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let result = test_prober(2).probe(&server.uri()).await.unwrap();
    assert_eq!(result.status_code, 200);
    assert_eq!(result.final_url, format!("{}/", server.uri()));
    assert_eq!(result.final_hostname, "127.0.0.1");
}

#[tokio::test]
async fn test_probe_sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_prober(2).probe(&server.uri()).await.unwrap();
    assert_eq!(result.status_code, 204);
}

#[tokio::test]
async fn test_bad_status_is_a_result_and_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_prober(3).probe(&server.uri()).await.unwrap();
    assert_eq!(result.status_code, 503);
    // MockServer verifies `expect(1)` on drop
}

#[tokio::test]
async fn test_probe_follows_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/landing"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/landing"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = test_prober(2)
        .probe(&format!("{}/start", server.uri()))
        .await
        .unwrap();
    assert_eq!(result.status_code, 200);
    assert_eq!(result.final_url, format!("{}/landing", server.uri()));
}

#[tokio::test]
async fn test_redirect_cap_returns_last_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/hop/\d+$"))
        .respond_with(|req: &Request| {
            let n: usize = req
                .url
                .path()
                .trim_start_matches("/hop/")
                .parse()
                .unwrap_or(0);
            ResponseTemplate::new(302).insert_header("Location", format!("/hop/{}", n + 1))
        })
        .mount(&server)
        .await;

    let result = test_prober(2)
        .probe(&format!("{}/hop/0", server.uri()))
        .await
        .expect("hitting the redirect cap is not a failure");

    assert_eq!(result.status_code, 302);
    assert_eq!(
        result.final_url,
        format!("{}/hop/{}", server.uri(), MAX_REDIRECT_HOPS - 1)
    );
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), MAX_REDIRECT_HOPS);
}

#[tokio::test]
async fn test_transport_failure_exhausts_attempts() {
    let url = closed_port_url();
    let err = test_prober(2).probe(&url).await.unwrap_err();
    match err {
        ProbeError::Transport { attempts, .. } => assert_eq!(attempts, 2),
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_url_is_not_retried() {
    let err = test_prober(5).probe("http://").await.unwrap_err();
    assert!(matches!(err, ProbeError::InvalidUrl { .. }));
}

#[tokio::test]
async fn test_prober_is_shareable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let prober: Arc<dyn Prober> = Arc::new(test_prober(1));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let prober = Arc::clone(&prober);
            let uri = server.uri();
            tokio::spawn(async move { prober.probe(&uri).await })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().status_code, 200);
    }
}
