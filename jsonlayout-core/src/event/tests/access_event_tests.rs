use crate::event::access::parse_query;
use crate::event::{AccessEvent, ExtractionError, HttpAccessEvent};
use pretty_assertions::assert_eq;

fn event() -> HttpAccessEvent {
    HttpAccessEvent {
        method: "GET".into(),
        request_uri: "/search".into(),
        protocol: "HTTP/1.1".into(),
        ..Default::default()
    }
}

#[test]
fn request_url_joins_request_line() {
    let mut e = event();
    e.query_string = Some("q=rust".into());

    assert_eq!(e.request_url().unwrap(), "GET /search?q=rust HTTP/1.1");
}

#[test]
fn request_url_without_query() {
    let mut e = event();
    e.query_string = Some(String::new());

    assert_eq!(e.request_url().unwrap(), "GET /search HTTP/1.1");
}

#[test]
fn query_parameters_decode_and_group() {
    let params = parse_query("tag=a&tag=b%20c&q=hello+world&flag").unwrap();

    assert_eq!(params["tag"], vec!["a".to_string(), "b c".to_string()]);
    assert_eq!(params["q"], vec!["hello world".to_string()]);
    assert_eq!(params["flag"], vec![String::new()]);
}

#[test]
fn invalid_utf8_in_query_is_an_extraction_error() {
    let mut e = event();
    e.query_string = Some("name=%FF%FE".into());

    let err = e.request_parameters().unwrap_err();

    assert!(matches!(
        err,
        ExtractionError::Malformed {
            attribute: "request parameters",
            ..
        }
    ));
}

#[test]
fn missing_query_yields_no_parameters() {
    assert!(event().request_parameters().unwrap().is_empty());
}

#[test]
fn user_agent_lookup_ignores_case() {
    let mut e = event();
    e.request_headers.push("USER-AGENT", "curl/8.4");

    assert_eq!(e.user_agent().unwrap(), Some("curl/8.4"));
}

#[test]
fn decodes_camel_case_json() {
    let raw = r#"{
        "timestamp": 1513956631000,
        "method": "POST",
        "requestUri": "/orders",
        "statusCode": 201,
        "remoteAddr": "10.0.0.1",
        "requestHeaders": {"Content-Type": "application/json"}
    }"#;

    let e: HttpAccessEvent = serde_json::from_str(raw).unwrap();

    assert_eq!(e.status_code, 201);
    assert_eq!(e.remote_addr, "10.0.0.1");
    assert_eq!(e.request_headers.len(), 1);
    assert_eq!(e.content_length, None);
}
