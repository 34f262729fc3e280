#![cfg(target_os = "windows")]

use jus_report_core::platform::{PlatformError, PlatformErrorKind, PlatformInfoProvider};
use jus_report_core::register_platform_info_provider;
use windows::Wdk::System::SystemServices::RtlGetVersion;
use windows::Win32::System::SystemInformation::OSVERSIONINFOW;

static WINDOWS_PLATFORM: WindowsPlatformInfo = WindowsPlatformInfo;

register_platform_info_provider!(&WINDOWS_PLATFORM);

struct WindowsPlatformInfo;

impl PlatformInfoProvider for WindowsPlatformInfo {
    fn platform_name(&self) -> &'static str {
        "Windows"
    }

    fn os_version(&self) -> Result<String, PlatformError> {
        let mut version_info = OSVERSIONINFOW {
            dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOW>() as u32,
            ..Default::default()
        };
        let status = unsafe { RtlGetVersion(&mut version_info) };
        if !status.is_ok() {
            return Err(PlatformError::new(
                PlatformErrorKind::VersionUnavailable,
                format!("RtlGetVersion failed with status {:#x}", status.0),
            ));
        }
        Ok(format!(
            "{}.{}.{}",
            version_info.dwMajorVersion, version_info.dwMinorVersion, version_info.dwBuildNumber
        ))
    }
}
