mod error;
mod info;

pub use error::{PlatformError, PlatformErrorKind};
pub use info::{PlatformInfoProvider, PlatformInfoRegistration, platform_info_providers};

#[macro_export]
macro_rules! register_platform_info_provider {
    ($provider:expr) => {
        inventory::submit! {
            $crate::platform::PlatformInfoRegistration { provider: $provider }
        }
    };
}

pub use register_platform_info_provider;
