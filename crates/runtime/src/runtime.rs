use std::sync::Arc;

use jus_report_core::channel::{
    ChannelError, MethodCall, MethodCallHandler, MethodChannelPlugin, MethodResult,
    method_channel_plugins,
};
use jus_report_core::platform::{PlatformInfoProvider, platform_info_providers};

use crate::{ChannelRegistry, RuntimeError};

/// Central orchestrator standing in for the host framework's registrar.
///
/// Construction resolves the platform descriptor, instantiates every
/// registered plugin with it and binds each handler on its channel. After
/// that the runtime is immutable; calls are routed without locking and the
/// runtime can be shared across threads.
pub struct Runtime {
    registry: ChannelRegistry,
    platform: &'static dyn PlatformInfoProvider,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("channels", &self.registry.len())
            .field("platform", &self.platform.platform_name())
            .finish()
    }
}

impl Runtime {
    /// Binds all registered plugins using the registered platform provider.
    pub fn new() -> Result<Self, RuntimeError> {
        let plugins: Vec<_> = method_channel_plugins().collect();
        Self::with_plugins_and_platform(&plugins, resolve_platform()?)
    }

    /// Registered plugins with an explicitly injected platform descriptor.
    pub fn with_platform(
        platform: &'static dyn PlatformInfoProvider,
    ) -> Result<Self, RuntimeError> {
        let plugins: Vec<_> = method_channel_plugins().collect();
        Self::with_plugins_and_platform(&plugins, platform)
    }

    /// Fully explicit construction, mainly for tests.
    pub fn with_plugins_and_platform(
        plugins: &[&'static dyn MethodChannelPlugin],
        platform: &'static dyn PlatformInfoProvider,
    ) -> Result<Self, RuntimeError> {
        let mut registry = ChannelRegistry::new();
        for plugin in plugins {
            let handler = plugin.create_handler(platform)?;
            registry.bind(plugin.channel_name(), handler)?;
        }
        tracing::debug!(
            platform = platform.platform_name(),
            channels = registry.len(),
            "runtime initialized"
        );
        Ok(Self { registry, platform })
    }

    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// The platform descriptor handlers were created with.
    pub fn platform(&self) -> &'static dyn PlatformInfoProvider {
        self.platform
    }

    pub fn invoke(&self, channel: &str, call: &MethodCall) -> Result<MethodResult, ChannelError> {
        self.registry.invoke(channel, call)
    }

    /// Convenience for argument-less calls.
    pub fn invoke_method(&self, channel: &str, method: &str) -> Result<MethodResult, ChannelError> {
        self.invoke(channel, &MethodCall::new(method))
    }

    pub fn channels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registry.channels()
    }

    pub fn handler(&self, channel: &str) -> Option<&Arc<dyn MethodCallHandler>> {
        self.registry.handler(channel)
    }
}

fn resolve_platform() -> Result<&'static dyn PlatformInfoProvider, RuntimeError> {
    platform_info_providers().next().ok_or(RuntimeError::NoPlatformProvider)
}
