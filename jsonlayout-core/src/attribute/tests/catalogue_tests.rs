use crate::attribute::{AccessAttribute, Attribute, AttributeSet, EventAttribute};
use crate::conf::ConfigError;
use pretty_assertions::assert_eq;

#[test]
fn access_default_field_names_are_stable() {
    let names: Vec<_> = AccessAttribute::ALL
        .iter()
        .map(|a| a.field_name())
        .collect();

    assert_eq!(
        names,
        vec![
            "port",
            "contentLength",
            "timestamp",
            "method",
            "protocol",
            "requestContent",
            "remoteAddress",
            "remoteUser",
            "params",
            "requestTime",
            "uri",
            "url",
            "remoteHost",
            "responseContent",
            "serverName",
            "status",
            "userAgent",
        ]
    );
}

#[test]
fn event_default_field_names_are_stable() {
    let names: Vec<_> = EventAttribute::ALL
        .iter()
        .map(|a| a.field_name())
        .collect();

    assert_eq!(
        names,
        vec![
            "timestamp",
            "level",
            "thread",
            "mdc",
            "logger",
            "message",
            "context",
            "exception",
        ]
    );
}

#[test]
fn index_matches_catalogue_position() {
    for (i, attr) in AccessAttribute::ALL.iter().enumerate() {
        assert_eq!(attr.index(), i);
    }
    for (i, attr) in EventAttribute::ALL.iter().enumerate() {
        assert_eq!(attr.index(), i);
    }
}

#[test]
fn access_defaults_exclude_opt_in_attributes() {
    let defaults = AccessAttribute::default_includes();

    assert_eq!(defaults.len(), 10);
    for off in [
        AccessAttribute::RequestUrl,
        AccessAttribute::RemoteHost,
        AccessAttribute::ServerName,
        AccessAttribute::RequestParameters,
        AccessAttribute::RequestContent,
        AccessAttribute::ResponseContent,
        AccessAttribute::LocalPort,
    ] {
        assert!(!defaults.contains(off), "{off} should be off by default");
    }
}

#[test]
fn event_defaults_exclude_context_name() {
    let defaults: AttributeSet<EventAttribute> = AttributeSet::default();

    assert_eq!(defaults.len(), 7);
    assert!(!defaults.contains(EventAttribute::ContextName));
    assert!(defaults.contains(EventAttribute::Exception));
}

#[test]
fn symbols_parse_fuzzily() {
    for raw in ["remoteAddress", "REMOTE_ADDRESS", "remote-address", "remoteaddress"] {
        assert_eq!(
            raw.parse::<AccessAttribute>().unwrap(),
            AccessAttribute::RemoteAddress
        );
    }
    assert_eq!(
        "THREAD_NAME".parse::<EventAttribute>().unwrap(),
        EventAttribute::ThreadName
    );
}

#[test]
fn unknown_symbol_is_a_config_error() {
    let err = "colour".parse::<EventAttribute>().unwrap_err();

    assert!(matches!(
        err,
        ConfigError::UnknownAttribute { kind: "event", ref name } if name == "colour"
    ));
}
