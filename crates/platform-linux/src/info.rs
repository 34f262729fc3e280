#![cfg(target_os = "linux")]

use std::fs;

use jus_report_core::platform::{PlatformError, PlatformErrorKind, PlatformInfoProvider};
use jus_report_core::register_platform_info_provider;

const OS_RELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

static LINUX_PLATFORM: LinuxPlatformInfo = LinuxPlatformInfo;

register_platform_info_provider!(&LINUX_PLATFORM);

struct LinuxPlatformInfo;

impl PlatformInfoProvider for LinuxPlatformInfo {
    fn platform_name(&self) -> &'static str {
        "Linux"
    }

    fn os_version(&self) -> Result<String, PlatformError> {
        let release = fs::read_to_string(OS_RELEASE_PATH).map_err(|err| {
            PlatformError::new(
                PlatformErrorKind::VersionUnavailable,
                format!("reading {OS_RELEASE_PATH} failed: {err}"),
            )
        })?;
        let release = release.trim();
        if release.is_empty() {
            return Err(PlatformError::new(
                PlatformErrorKind::VersionUnavailable,
                format!("{OS_RELEASE_PATH} is empty"),
            ));
        }
        Ok(release.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jus_report_core::platform::platform_info_providers;
    use rstest::rstest;

    #[rstest]
    fn linux_platform_is_registered() {
        let names: Vec<_> = platform_info_providers().map(|p| p.platform_name()).collect();
        assert!(names.contains(&"Linux"));
    }

    #[rstest]
    fn kernel_release_is_non_empty() {
        let version = LINUX_PLATFORM.os_version().expect("version");
        assert!(!version.is_empty());
        assert!(!version.contains('\n'));
    }
}
