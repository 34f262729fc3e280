mod call;
mod error;
mod handler;
mod plugin;
mod registration;

pub use call::{MethodCall, MethodResult};
pub use error::{ChannelError, ChannelErrorKind};
pub use handler::MethodCallHandler;
pub use plugin::MethodChannelPlugin;
pub use registration::{PluginRegistration, method_channel_plugins};

#[macro_export]
macro_rules! register_method_channel_plugin {
    ($plugin:expr) => {
        inventory::submit! {
            $crate::channel::PluginRegistration { plugin: $plugin }
        }
    };
}

pub use register_method_channel_plugin;
