use crate::attribute::{Attribute, AttributeSet};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Attributes of an HTTP access event.
///
/// Request and response headers are not part of the inclusion set: they are emitted
/// whenever a header allowlist is configured for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum AccessAttribute {
    LocalPort,
    ContentLength,
    Timestamp,
    Method,
    Protocol,
    RequestContent,
    RemoteAddress,
    RemoteUser,
    RequestParameters,
    RequestTime,
    RequestUri,
    RequestUrl,
    RemoteHost,
    ResponseContent,
    ServerName,
    StatusCode,
    UserAgent,
}

impl Attribute for AccessAttribute {
    const KIND: &'static str = "access";

    const ALL: &'static [Self] = &[
        Self::LocalPort,
        Self::ContentLength,
        Self::Timestamp,
        Self::Method,
        Self::Protocol,
        Self::RequestContent,
        Self::RemoteAddress,
        Self::RemoteUser,
        Self::RequestParameters,
        Self::RequestTime,
        Self::RequestUri,
        Self::RequestUrl,
        Self::RemoteHost,
        Self::ResponseContent,
        Self::ServerName,
        Self::StatusCode,
        Self::UserAgent,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::LocalPort => "localPort",
            Self::ContentLength => "contentLength",
            Self::Timestamp => "timestamp",
            Self::Method => "method",
            Self::Protocol => "protocol",
            Self::RequestContent => "requestContent",
            Self::RemoteAddress => "remoteAddress",
            Self::RemoteUser => "remoteUser",
            Self::RequestParameters => "requestParameters",
            Self::RequestTime => "requestTime",
            Self::RequestUri => "requestUri",
            Self::RequestUrl => "requestUrl",
            Self::RemoteHost => "remoteHost",
            Self::ResponseContent => "responseContent",
            Self::ServerName => "serverName",
            Self::StatusCode => "statusCode",
            Self::UserAgent => "userAgent",
        }
    }

    fn field_name(self) -> &'static str {
        match self {
            Self::LocalPort => "port",
            Self::ContentLength => "contentLength",
            Self::Timestamp => "timestamp",
            Self::Method => "method",
            Self::Protocol => "protocol",
            Self::RequestContent => "requestContent",
            Self::RemoteAddress => "remoteAddress",
            Self::RemoteUser => "remoteUser",
            Self::RequestParameters => "params",
            Self::RequestTime => "requestTime",
            Self::RequestUri => "uri",
            Self::RequestUrl => "url",
            Self::RemoteHost => "remoteHost",
            Self::ResponseContent => "responseContent",
            Self::ServerName => "serverName",
            Self::StatusCode => "status",
            Self::UserAgent => "userAgent",
        }
    }

    fn default_includes() -> AttributeSet<Self> {
        AttributeSet::of(&[
            Self::RemoteAddress,
            Self::RemoteUser,
            Self::RequestTime,
            Self::RequestUri,
            Self::StatusCode,
            Self::Method,
            Self::Protocol,
            Self::ContentLength,
            Self::UserAgent,
            Self::Timestamp,
        ])
    }
}

impl FromStr for AccessAttribute {
    type Err = crate::conf::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_symbol(s)
    }
}

impl TryFrom<String> for AccessAttribute {
    type Error = crate::conf::ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AccessAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
