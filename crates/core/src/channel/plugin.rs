use std::sync::Arc;

use super::{ChannelError, MethodCallHandler};
use crate::platform::PlatformInfoProvider;

/// Factory for a channel-bound handler.
///
/// A plugin names the one channel it answers on and builds the handler
/// instance the runtime binds there for the process lifetime. The platform
/// descriptor is injected at creation so plugins stay free of OS probing.
pub trait MethodChannelPlugin: Send + Sync {
    fn channel_name(&self) -> &'static str;

    fn create_handler(
        &self,
        platform: &'static dyn PlatformInfoProvider,
    ) -> Result<Arc<dyn MethodCallHandler>, ChannelError>;
}
