//! Event stream processing.
//!
//! Reads one JSON event per line, projects it through the configured layout and
//! writes the resulting document. Lines that do not decode are reported and skipped
//! so one bad producer cannot stall the stream.
//!
//! stdin
//! decode (HttpAccessEvent | LogRecord)
//! JsonLayout::do_layout
//! stdout

use crate::conf::load_layouts;
use crate::event::{HttpAccessEvent, LogRecord};
use crate::layout::{JsonLayout, LayoutHandle};
use crate::runtime::{Layouts, build_layouts};
use anyhow::{Context, Result, anyhow};
use serde::de::DeserializeOwned;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Log,
    Access,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    pub written: u64,
    pub skipped: u64,
}

pub fn run_stream(kind: EventKind, config: &Path) -> Result<StreamSummary> {
    let cfg = load_layouts(config)?;
    let handle = LayoutHandle::new(build_layouts(&cfg)?);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = process_stream(kind, &handle, stdin.lock(), stdout.lock())?;

    tracing::info!(
        written = summary.written,
        skipped = summary.skipped,
        "event stream finished"
    );
    Ok(summary)
}

pub fn process_stream<R: BufRead, W: Write>(
    kind: EventKind,
    handle: &LayoutHandle<Layouts>,
    reader: R,
    writer: W,
) -> Result<StreamSummary> {
    let layouts = handle.load();

    match kind {
        EventKind::Log => {
            let layout = layouts
                .event
                .as_ref()
                .ok_or_else(|| anyhow!("no event_layout configured"))?;
            project_lines::<LogRecord, _, _, _>(layout, reader, writer)
        }
        EventKind::Access => {
            let layout = layouts
                .access
                .as_ref()
                .ok_or_else(|| anyhow!("no access_layout configured"))?;
            project_lines::<HttpAccessEvent, _, _, _>(layout, reader, writer)
        }
    }
}

fn project_lines<E, L, R, W>(layout: &L, reader: R, mut writer: W) -> Result<StreamSummary>
where
    E: DeserializeOwned,
    L: JsonLayout<E>,
    R: BufRead,
    W: Write,
{
    let mut summary = StreamSummary::default();

    for (n, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let event: E = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(line = n + 1, error = %e, "skipping undecodable event");
                summary.skipped += 1;
                continue;
            }
        };

        let json = layout.do_layout(&event)?;
        writer
            .write_all(json.as_bytes())
            .context("failed to write document")?;
        summary.written += 1;
    }

    writer.flush().context("failed to flush output")?;
    Ok(summary)
}
