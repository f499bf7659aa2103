//! Tests for the lookup transports

use super::*;
use mockito::{Matcher, Server};
use std::time::Instant;

#[tokio::test]
async fn test_http_lookup_sends_query_param() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/people")
        .match_query(Matcher::UrlEncoded("name".into(), "john smith".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["John Smith","John Smithers"]"#)
        .create_async()
        .await;

    let lookup = HttpLookup::new("name").unwrap();
    let endpoint = format!("{}/api/people", server.url());
    let suggestions = lookup.fetch(&endpoint, "john smith").await.unwrap();

    assert_eq!(
        suggestions,
        vec![Suggestion::plain("John Smith"), Suggestion::plain("John Smithers")]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_http_lookup_custom_param_and_records() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/orgs")
        .match_query(Matcher::UrlEncoded("q".into(), "leeds".into()))
        .with_body(r#"[{"label":"Leeds Teaching Hospitals","value":"RR8"}]"#)
        .create_async()
        .await;

    let lookup = HttpLookup::new("q").unwrap();
    let suggestions = lookup
        .fetch(&format!("{}/orgs", server.url()), "leeds")
        .await
        .unwrap();
    assert_eq!(suggestions, vec![Suggestion::new("Leeds Teaching Hospitals", "RR8")]);
}

#[tokio::test]
async fn test_http_lookup_status_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/people")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let lookup = HttpLookup::new("name").unwrap();
    let err = lookup
        .fetch(&format!("{}/api/people", server.url()), "john")
        .await
        .unwrap_err();
    assert_eq!(err, LookupError::Status { code: 503 });
}

#[tokio::test]
async fn test_http_lookup_malformed_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/people")
        .match_query(Matcher::Any)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let lookup = HttpLookup::new("name").unwrap();
    let err = lookup
        .fetch(&format!("{}/api/people", server.url()), "john")
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::Parse(_)));
}

#[tokio::test]
async fn test_http_lookup_unreachable_is_network_error() {
    let lookup = HttpLookup::new("name").unwrap();
    let err = lookup.fetch("not a url", "john").await.unwrap_err();
    assert!(matches!(err, LookupError::Network(_)));
}

#[tokio::test]
async fn test_static_lookup_filters_case_insensitively() {
    let lookup = StaticLookup::new(vec![
        Suggestion::plain("John Smith"),
        Suggestion::plain("Mary Johnson"),
        Suggestion::plain("Ada Lovelace"),
    ]);
    let suggestions = lookup.fetch("ignored", "JOHN").await.unwrap();
    assert_eq!(
        suggestions,
        vec![Suggestion::plain("John Smith"), Suggestion::plain("Mary Johnson")]
    );
    assert!(lookup.fetch("ignored", "zzz").await.unwrap().is_empty());
}

#[test]
fn test_static_lookup_from_json() {
    let lookup = StaticLookup::from_json(r#"["Alpha", {"label": "Beta", "value": "b"}]"#).unwrap();
    assert_eq!(lookup.entries().len(), 2);
    assert_eq!(lookup.matches("bet"), vec![Suggestion::new("Beta", "b")]);
    assert!(StaticLookup::from_json("not json").is_err());
}

#[tokio::test]
async fn test_static_latency_is_longer_for_shorter_queries() {
    let lookup = StaticLookup::new(vec![Suggestion::plain("Johnny")]).with_latency(Duration::from_millis(10));

    let start = Instant::now();
    lookup.fetch("", "joh").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(30));
}

#[tokio::test]
async fn test_static_without_latency_is_immediate() {
    let lookup = StaticLookup::new(vec![Suggestion::plain("Johnny")]).with_latency(Duration::ZERO);
    let start = Instant::now();
    lookup.fetch("", "joh").await.unwrap();
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_error_display() {
    assert_eq!(
        LookupError::Status { code: 404 }.to_string(),
        "Lookup endpoint returned HTTP 404"
    );
    assert_eq!(LookupError::WorkerGone.to_string(), "Lookup worker is not running");
}
