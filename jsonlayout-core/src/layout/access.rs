use crate::attribute::{AccessAttribute, Attribute, AttributeSet};
use crate::event::AccessEvent;
use crate::layout::{
    Document, ExtractionStats, JsonFormatter, JsonLayout, LayoutSettings, MapBuilder,
    filter_headers,
};
use std::collections::BTreeSet;

use AccessAttribute::*;

/// Projects HTTP access events.
#[derive(Debug, Default)]
pub struct AccessJsonLayout {
    settings: LayoutSettings,
    includes: AttributeSet<AccessAttribute>,
    request_headers: BTreeSet<String>,
    response_headers: BTreeSet<String>,
    stats: ExtractionStats,
}

impl AccessJsonLayout {
    pub fn new(settings: LayoutSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn with_includes(mut self, includes: AttributeSet<AccessAttribute>) -> Self {
        self.includes = includes;
        self
    }

    /// Request headers surfaced under `headers`. Empty disables the field.
    pub fn with_request_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request_headers = names.into_iter().map(Into::into).collect();
        self
    }

    /// Response headers surfaced under `responseHeaders`. Empty disables the field.
    pub fn with_response_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.response_headers = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn includes(&self) -> AttributeSet<AccessAttribute> {
        self.includes
    }

    pub fn request_headers(&self) -> &BTreeSet<String> {
        &self.request_headers
    }

    pub fn response_headers(&self) -> &BTreeSet<String> {
        &self.response_headers
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Fields dropped so far because extraction failed.
    pub fn extraction_failures(&self) -> u64 {
        self.stats.failures()
    }

    fn is_included(&self, attr: AccessAttribute) -> bool {
        self.includes.contains(attr)
    }
}

impl<E: AccessEvent + ?Sized> JsonLayout<E> for AccessJsonLayout {
    fn to_json_map(&self, event: &E) -> Document {
        let version = self.settings.json_protocol_version.as_deref();

        MapBuilder::new(&self.settings, &self.stats, 20)
            .add_with(LocalPort.field_name(), self.is_included(LocalPort), || {
                event.local_port()
            })
            .add_with(
                ContentLength.field_name(),
                self.is_included(ContentLength),
                || event.content_length(),
            )
            .add_timestamp_with(Timestamp.field_name(), self.is_included(Timestamp), || {
                event.timestamp()
            })
            .add_with(Method.field_name(), self.is_included(Method), || {
                event.method()
            })
            .add_with(Protocol.field_name(), self.is_included(Protocol), || {
                event.protocol()
            })
            .add_with(
                RequestContent.field_name(),
                self.is_included(RequestContent),
                || event.request_content(),
            )
            .add_with(
                RemoteAddress.field_name(),
                self.is_included(RemoteAddress),
                || event.remote_addr(),
            )
            .add_with(RemoteUser.field_name(), self.is_included(RemoteUser), || {
                event.remote_user()
            })
            .add_with("headers", !self.request_headers.is_empty(), || {
                Ok(filter_headers(event.request_headers()?, &self.request_headers))
            })
            .add_with(
                RequestParameters.field_name(),
                self.is_included(RequestParameters),
                || event.request_parameters(),
            )
            .add_with(
                RequestTime.field_name(),
                self.is_included(RequestTime),
                || event.elapsed_time(),
            )
            .add_with(RequestUri.field_name(), self.is_included(RequestUri), || {
                event.request_uri()
            })
            .add_with(RequestUrl.field_name(), self.is_included(RequestUrl), || {
                event.request_url()
            })
            .add_with(RemoteHost.field_name(), self.is_included(RemoteHost), || {
                event.remote_host()
            })
            .add_with(
                ResponseContent.field_name(),
                self.is_included(ResponseContent),
                || event.response_content(),
            )
            .add_with("responseHeaders", !self.response_headers.is_empty(), || {
                Ok(filter_headers(
                    event.response_headers()?,
                    &self.response_headers,
                ))
            })
            .add_with(ServerName.field_name(), self.is_included(ServerName), || {
                event.server_name()
            })
            .add_with(StatusCode.field_name(), self.is_included(StatusCode), || {
                event.status_code()
            })
            .add_with(UserAgent.field_name(), self.is_included(UserAgent), || {
                event.user_agent()
            })
            .add("version", version.is_some(), version)
            .build()
    }

    fn formatter(&self) -> &JsonFormatter {
        &self.settings.formatter
    }
}
