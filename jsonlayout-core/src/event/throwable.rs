use serde::Deserialize;

/// Exception data carried by a log event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowableInfo {
    pub class_name: String,

    #[serde(default)]
    pub message: Option<String>,

    /// Stack frames, innermost call first.
    #[serde(default)]
    pub frames: Vec<String>,

    #[serde(default)]
    pub cause: Option<Box<ThrowableInfo>>,
}

impl ThrowableInfo {
    pub fn new(class_name: impl Into<String>, message: Option<&str>) -> Self {
        Self {
            class_name: class_name.into(),
            message: message.map(str::to_string),
            frames: Vec::new(),
            cause: None,
        }
    }

    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }

    pub fn caused_by(mut self, cause: ThrowableInfo) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// The throwable followed by its causes, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &ThrowableInfo> {
        std::iter::successors(Some(self), |t| t.cause.as_deref())
    }
}
