use super::MethodChannelPlugin;

pub struct PluginRegistration {
    pub plugin: &'static dyn MethodChannelPlugin,
}

inventory::collect!(PluginRegistration);

/// Iterates over all plugins registered via
/// [`register_method_channel_plugin!`](crate::register_method_channel_plugin).
pub fn method_channel_plugins() -> impl Iterator<Item = &'static dyn MethodChannelPlugin> {
    inventory::iter::<PluginRegistration>.into_iter().map(|entry| entry.plugin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{ChannelError, MethodCallHandler, register_method_channel_plugin};
    use crate::platform::PlatformInfoProvider;
    use std::sync::Arc;

    struct StubPlugin;

    impl MethodChannelPlugin for StubPlugin {
        fn channel_name(&self) -> &'static str {
            "stub_channel"
        }

        fn create_handler(
            &self,
            _platform: &'static dyn PlatformInfoProvider,
        ) -> Result<Arc<dyn MethodCallHandler>, ChannelError> {
            Err(ChannelError::new(
                crate::channel::ChannelErrorKind::InitializationFailed,
                "stub plugin has no handler",
            ))
        }
    }

    static PLUGIN: StubPlugin = StubPlugin;

    register_method_channel_plugin!(&PLUGIN);

    #[test]
    fn registration_exposes_plugin() {
        let channels: Vec<_> = method_channel_plugins().map(|plugin| plugin.channel_name()).collect();
        assert!(channels.contains(&"stub_channel"));
    }
}
