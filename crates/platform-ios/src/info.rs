#![cfg(target_os = "ios")]

use jus_report_core::platform::{PlatformError, PlatformInfoProvider};
use jus_report_core::register_platform_info_provider;
use objc2_foundation::NSProcessInfo;

static IOS_PLATFORM: IosPlatformInfo = IosPlatformInfo;

register_platform_info_provider!(&IOS_PLATFORM);

struct IosPlatformInfo;

impl PlatformInfoProvider for IosPlatformInfo {
    fn platform_name(&self) -> &'static str {
        "iOS"
    }

    fn os_version(&self) -> Result<String, PlatformError> {
        let version = NSProcessInfo::processInfo().operatingSystemVersion();
        Ok(format!(
            "{}.{}.{}",
            version.majorVersion, version.minorVersion, version.patchVersion
        ))
    }
}
