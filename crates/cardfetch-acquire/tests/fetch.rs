use cardfetch_acquire::{FetchError, HttpFetcher};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(timeout: Duration) -> HttpFetcher {
    HttpFetcher::new("cardfetch-test", timeout).unwrap()
}

#[tokio::test]
async fn test_fetch_bytes_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, b'P', b'N', b'G']))
        .mount(&server)
        .await;

    let bytes = fetcher(Duration::from_secs(5))
        .fetch_bytes(&format!("{}/card.png", server.uri()))
        .await
        .unwrap();
    assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/set/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let url = format!("{}/set/", server.uri());
    let err = fetcher(Duration::from_secs(5)).fetch_page(&url).await.unwrap_err();

    match &err {
        FetchError::Status { url: failed, status } => {
            assert_eq!(failed, &url);
            assert_eq!(status.as_u16(), 403);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "HTTP 403 Forbidden");
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow.png"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let err = fetcher(Duration::from_millis(200))
        .fetch_bytes(&format!("{}/slow.png", server.uri()))
        .await
        .unwrap_err();

    match err {
        FetchError::Transport { source, .. } => assert!(source.is_timeout()),
        other => panic!("expected a transport error, got {other:?}"),
    }
}
