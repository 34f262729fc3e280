//! Core types and traits for the jus-report method-channel plugin.
//!
//! A host application routes method calls over named channels. This crate
//! defines the call/response contract, the handler and plugin traits, the
//! platform info provider abstraction and the registration machinery that
//! platform and plugin crates use to announce themselves to the runtime.

pub mod channel;
pub mod platform;

pub use channel::{
    ChannelError, ChannelErrorKind, MethodCall, MethodCallHandler, MethodChannelPlugin,
    MethodResult, method_channel_plugins,
};
pub use platform::{
    PlatformError, PlatformErrorKind, PlatformInfoProvider, platform_info_providers,
};
