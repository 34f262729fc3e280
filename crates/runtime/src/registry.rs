use std::collections::BTreeMap;
use std::sync::Arc;

use jus_report_core::channel::{
    ChannelError, ChannelErrorKind, MethodCall, MethodCallHandler, MethodResult,
};

/// Routes method calls to the handler bound on each named channel.
///
/// Binding is exclusive: once a handler owns a channel it keeps it for the
/// registry's lifetime, so exactly one instance answers all requests there.
#[derive(Default)]
pub struct ChannelRegistry {
    handlers: BTreeMap<&'static str, Arc<dyn MethodCallHandler>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self { handlers: BTreeMap::new() }
    }

    pub fn bind(
        &mut self,
        channel: &'static str,
        handler: Arc<dyn MethodCallHandler>,
    ) -> Result<(), ChannelError> {
        if self.handlers.contains_key(channel) {
            return Err(ChannelError::new(
                ChannelErrorKind::ChannelAlreadyBound,
                format!("channel {channel:?} already has a handler"),
            ));
        }
        tracing::debug!(channel, "binding method call handler");
        self.handlers.insert(channel, handler);
        Ok(())
    }

    /// Dispatches one call and returns its one response.
    pub fn invoke(&self, channel: &str, call: &MethodCall) -> Result<MethodResult, ChannelError> {
        let handler = self.handlers.get(channel).ok_or_else(|| {
            ChannelError::new(
                ChannelErrorKind::UnknownChannel,
                format!("no handler bound on channel {channel:?}"),
            )
        })?;
        tracing::trace!(channel, method = %call.method, "dispatching method call");
        handler.handle(call)
    }

    pub fn handler(&self, channel: &str) -> Option<&Arc<dyn MethodCallHandler>> {
        self.handlers.get(channel)
    }

    pub fn channels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
