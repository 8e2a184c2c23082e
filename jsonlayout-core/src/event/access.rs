use crate::event::{Extracted, ExtractionError, Headers};
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Decoded query parameters; a name may repeat.
pub type RequestParameters = BTreeMap<String, Vec<String>>;

/// Read access to one completed HTTP exchange.
///
/// Accessors are fallible so that a single broken attribute only costs its own field.
pub trait AccessEvent {
    /// Epoch milliseconds at which the exchange was logged.
    fn timestamp(&self) -> Extracted<i64>;

    fn local_port(&self) -> Extracted<u16>;

    /// Response content length, if known.
    fn content_length(&self) -> Extracted<Option<u64>>;

    fn method(&self) -> Extracted<&str>;

    fn protocol(&self) -> Extracted<&str>;

    fn request_content(&self) -> Extracted<Option<&str>>;

    fn remote_addr(&self) -> Extracted<&str>;

    fn remote_user(&self) -> Extracted<Option<&str>>;

    fn request_headers(&self) -> Extracted<&Headers>;

    fn request_parameters(&self) -> Extracted<RequestParameters>;

    /// Milliseconds between receiving the request and logging it.
    fn elapsed_time(&self) -> Extracted<i64>;

    fn request_uri(&self) -> Extracted<&str>;

    /// The request line: method, URI with query, protocol.
    fn request_url(&self) -> Extracted<String>;

    fn remote_host(&self) -> Extracted<&str>;

    fn response_content(&self) -> Extracted<Option<&str>>;

    fn response_headers(&self) -> Extracted<&Headers>;

    fn server_name(&self) -> Extracted<&str>;

    fn status_code(&self) -> Extracted<u16>;

    fn user_agent(&self) -> Extracted<Option<&str>> {
        Ok(self.request_headers()?.get_ignore_case("user-agent"))
    }
}

/// An access event as decoded from a JSON line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpAccessEvent {
    pub timestamp: i64,
    pub local_port: u16,
    pub content_length: Option<u64>,
    pub method: String,
    pub protocol: String,
    pub request_uri: String,
    pub query_string: Option<String>,
    pub request_content: Option<String>,
    pub remote_addr: String,
    pub remote_user: Option<String>,
    pub remote_host: String,
    pub request_headers: Headers,
    pub elapsed_time: i64,
    pub response_content: Option<String>,
    pub response_headers: Headers,
    pub server_name: String,
    pub status_code: u16,
}

impl AccessEvent for HttpAccessEvent {
    fn timestamp(&self) -> Extracted<i64> {
        Ok(self.timestamp)
    }

    fn local_port(&self) -> Extracted<u16> {
        Ok(self.local_port)
    }

    fn content_length(&self) -> Extracted<Option<u64>> {
        Ok(self.content_length)
    }

    fn method(&self) -> Extracted<&str> {
        Ok(&self.method)
    }

    fn protocol(&self) -> Extracted<&str> {
        Ok(&self.protocol)
    }

    fn request_content(&self) -> Extracted<Option<&str>> {
        Ok(self.request_content.as_deref())
    }

    fn remote_addr(&self) -> Extracted<&str> {
        Ok(&self.remote_addr)
    }

    fn remote_user(&self) -> Extracted<Option<&str>> {
        Ok(self.remote_user.as_deref())
    }

    fn request_headers(&self) -> Extracted<&Headers> {
        Ok(&self.request_headers)
    }

    fn request_parameters(&self) -> Extracted<RequestParameters> {
        match &self.query_string {
            Some(query) => parse_query(query),
            None => Ok(RequestParameters::new()),
        }
    }

    fn elapsed_time(&self) -> Extracted<i64> {
        Ok(self.elapsed_time)
    }

    fn request_uri(&self) -> Extracted<&str> {
        Ok(&self.request_uri)
    }

    fn request_url(&self) -> Extracted<String> {
        let mut url = format!("{} {}", self.method, self.request_uri);
        if let Some(query) = self.query_string.as_deref().filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        url.push(' ');
        url.push_str(&self.protocol);
        Ok(url)
    }

    fn remote_host(&self) -> Extracted<&str> {
        Ok(&self.remote_host)
    }

    fn response_content(&self) -> Extracted<Option<&str>> {
        Ok(self.response_content.as_deref())
    }

    fn response_headers(&self) -> Extracted<&Headers> {
        Ok(&self.response_headers)
    }

    fn server_name(&self) -> Extracted<&str> {
        Ok(&self.server_name)
    }

    fn status_code(&self) -> Extracted<u16> {
        Ok(self.status_code)
    }
}

/// Parses an `application/x-www-form-urlencoded` query string.
pub(crate) fn parse_query(query: &str) -> Extracted<RequestParameters> {
    let mut params = RequestParameters::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        params
            .entry(decode_component(name)?)
            .or_default()
            .push(decode_component(value)?);
    }

    Ok(params)
}

fn decode_component(raw: &str) -> Extracted<String> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| ExtractionError::malformed("request parameters", e.to_string()))
}
