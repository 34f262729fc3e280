#![cfg(target_os = "macos")]

use jus_report_core::platform::{PlatformError, PlatformInfoProvider};
use jus_report_core::register_platform_info_provider;
use objc2_foundation::NSProcessInfo;

static MACOS_PLATFORM: MacosPlatformInfo = MacosPlatformInfo;

register_platform_info_provider!(&MACOS_PLATFORM);

struct MacosPlatformInfo;

impl PlatformInfoProvider for MacosPlatformInfo {
    fn platform_name(&self) -> &'static str {
        "macOS"
    }

    fn os_version(&self) -> Result<String, PlatformError> {
        let version = NSProcessInfo::processInfo().operatingSystemVersion();
        Ok(format!(
            "{}.{}.{}",
            version.majorVersion, version.minorVersion, version.patchVersion
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jus_report_core::platform::platform_info_providers;
    use rstest::rstest;

    #[rstest]
    fn macos_platform_is_registered() {
        let names: Vec<_> = platform_info_providers().map(|p| p.platform_name()).collect();
        assert!(names.contains(&"macOS"));
    }

    #[rstest]
    fn version_has_major_and_minor_components() {
        let version = MACOS_PLATFORM.os_version().expect("version");
        assert!(version.split('.').count() >= 2);
    }
}
