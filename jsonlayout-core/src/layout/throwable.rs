use crate::conf::ConfigError;
use crate::event::ThrowableInfo;
use std::fmt::Write;
use std::ops::Deref;

/// Renders exception data into the text stored in the `exception` field.
///
/// Converters have a lifecycle: [`start`](ThrowableConverter::start) before the first
/// conversion, [`stop`](ThrowableConverter::stop) on shutdown. Layouts hold them
/// through [`StartedConverter`], which ties both calls to its own lifetime.
pub trait ThrowableConverter: Send + Sync {
    fn start(&mut self) -> Result<(), ConfigError>;

    fn stop(&mut self);

    fn is_started(&self) -> bool;

    fn convert(&self, throwable: &ThrowableInfo) -> String;
}

/// Prints the root cause first, then each enclosing throwable as `Wrapped by:`.
#[derive(Debug, Default)]
pub struct RootCauseFirstConverter {
    started: bool,
    max_frames: Option<usize>,
}

impl RootCauseFirstConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the stack frames printed per throwable.
    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = Some(max_frames);
        self
    }
}

impl ThrowableConverter for RootCauseFirstConverter {
    fn start(&mut self) -> Result<(), ConfigError> {
        self.started = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.started = false;
    }

    fn is_started(&self) -> bool {
        self.started
    }

    fn convert(&self, throwable: &ThrowableInfo) -> String {
        assert!(self.started, "throwable converter used before start");

        let chain: Vec<&ThrowableInfo> = throwable.chain().collect();
        let mut out = String::new();

        for (i, t) in chain.iter().rev().enumerate() {
            if i > 0 {
                out.push_str("Wrapped by: ");
            }
            out.push_str(&t.class_name);
            if let Some(message) = &t.message {
                let _ = write!(out, ": {message}");
            }
            out.push('\n');

            let limit = self.max_frames.unwrap_or(usize::MAX);
            for frame in t.frames.iter().take(limit) {
                let _ = writeln!(out, "\tat {frame}");
            }
            if t.frames.len() > limit {
                let _ = writeln!(out, "\t... {} more", t.frames.len() - limit);
            }
        }

        out
    }
}

/// A converter that has been started and is stopped when dropped.
pub struct StartedConverter {
    inner: Box<dyn ThrowableConverter>,
}

impl StartedConverter {
    pub fn start(mut converter: Box<dyn ThrowableConverter>) -> Result<Self, ConfigError> {
        converter.start()?;
        tracing::debug!("throwable converter started");
        Ok(Self { inner: converter })
    }
}

impl Deref for StartedConverter {
    type Target = dyn ThrowableConverter;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl Drop for StartedConverter {
    fn drop(&mut self) {
        self.inner.stop();
        tracing::debug!("throwable converter stopped");
    }
}

impl std::fmt::Debug for StartedConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StartedConverter")
            .field("started", &self.inner.is_started())
            .finish()
    }
}
