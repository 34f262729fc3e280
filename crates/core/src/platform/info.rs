use super::PlatformError;

/// Trait implemented by platform crates to describe the host OS.
///
/// The pair (label, version accessor) is the only platform-specific input
/// the plugin needs; everything else is shared across variants.
pub trait PlatformInfoProvider: Send + Sync {
    /// Fixed platform label, e.g. `"macOS"` or `"iOS"`.
    fn platform_name(&self) -> &'static str;

    /// Reads the operating system version from the host environment.
    fn os_version(&self) -> Result<String, PlatformError>;
}

pub struct PlatformInfoRegistration {
    pub provider: &'static dyn PlatformInfoProvider,
}

inventory::collect!(PlatformInfoRegistration);

pub fn platform_info_providers() -> impl Iterator<Item = &'static dyn PlatformInfoProvider> {
    inventory::iter::<PlatformInfoRegistration>.into_iter().map(|entry| entry.provider)
}
