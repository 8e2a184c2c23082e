use crate::attribute::Attribute;
use crate::conf::{ConfigError, load_layouts};
use crate::runtime::build_layouts;
use std::path::Path;

pub fn check(path: &Path) -> anyhow::Result<()> {
    match load_layouts(path).and_then(|cfg| build_layouts(&cfg)) {
        Ok(layouts) => {
            println!("✔ Config loaded successfully");
            if let Some(event) = &layouts.event {
                println!(
                    "✔ event layout: {}",
                    field_list(event.includes().iter().map(|a| a.field_name()))
                );
            }
            if let Some(access) = &layouts.access {
                println!(
                    "✔ access layout: {}",
                    field_list(access.includes().iter().map(|a| a.field_name()))
                );
                println!(
                    "✔ {} request headers, {} response headers",
                    access.request_headers().len(),
                    access.response_headers().len()
                );
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn field_list<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{err}");
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::NoLayouts { .. } => Some(
            "Declare at least one layout.\n\
             \n\
             Example:\n\
             \n\
             event_layout = {\n\
             \x20 includes = [\"timestamp\", \"level\", \"message\"]\n\
             }",
        ),

        ConfigError::InvalidTimeZone { .. } => Some(
            "Time zones are UTC/GMT, a fixed offset such as \"GMT+01:00\" or \"-0530\",\n\
             or a tz database region such as \"Europe/Berlin\".",
        ),

        ConfigError::InvalidTimestampPattern { .. } => Some(
            "Timestamp formats use date-time pattern letters,\n\
             e.g. \"yyyy-MM-dd'T'HH:mm:ss.SSSZ\".\n\
             Remove timestamp_format to log epoch milliseconds instead.",
        ),

        _ => None,
    }
}
