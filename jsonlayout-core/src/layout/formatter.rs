use crate::layout::Document;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Turns a document into its JSON text.
///
/// Fields holding `null` at the top level are left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonFormatter {
    pub pretty_print: bool,
    pub append_line_separator: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self {
            pretty_print: false,
            append_line_separator: true,
        }
    }
}

impl JsonFormatter {
    pub fn to_json(&self, doc: &Document) -> Result<String, serde_json::Error> {
        let fields = PresentFields(doc);
        let mut out = if self.pretty_print {
            serde_json::to_string_pretty(&fields)?
        } else {
            serde_json::to_string(&fields)?
        };

        if self.append_line_separator {
            out.push('\n');
        }
        Ok(out)
    }
}

struct PresentFields<'a>(&'a Document);

impl Serialize for PresentFields<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (k, v) in self.0.iter().filter(|(_, v)| !v.is_null()) {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
