use std::error::Error;
use std::fmt::{Display, Formatter};

/// General error reported by channel binding and dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelError {
    pub kind: ChannelErrorKind,
    pub message: Option<String>,
}

impl ChannelError {
    pub fn new(kind: ChannelErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: Some(message.into()) }
    }

    pub fn simple(kind: ChannelErrorKind) -> Self {
        Self { kind, message: None }
    }
}

impl Display for ChannelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{msg}"),
            None => write!(f, "{:#?}", self.kind),
        }
    }
}

impl Error for ChannelError {}

/// Categorises channel failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelErrorKind {
    ChannelAlreadyBound,
    UnknownChannel,
    InitializationFailed,
    PlatformUnavailable,
}
