//! Deterministic platform info for jus-report tests.
//!
//! Reports a fixed label and version so assertions do not depend on the
//! machine running the suite.

use jus_report_core::platform::{PlatformError, PlatformInfoProvider};
use jus_report_core::register_platform_info_provider;

pub const PLATFORM_NAME: &str = "MockOS";
pub const OS_VERSION: &str = "1.0";

static MOCK_PLATFORM: MockPlatformInfo = MockPlatformInfo;

register_platform_info_provider!(&MOCK_PLATFORM);

#[derive(Debug)]
struct MockPlatformInfo;

impl PlatformInfoProvider for MockPlatformInfo {
    fn platform_name(&self) -> &'static str {
        PLATFORM_NAME
    }

    fn os_version(&self) -> Result<String, PlatformError> {
        Ok(OS_VERSION.to_owned())
    }
}

/// The mock provider, for explicit injection into handlers and runtimes.
pub fn platform_info_provider() -> &'static dyn PlatformInfoProvider {
    &MOCK_PLATFORM
}

#[cfg(test)]
mod tests {
    use super::*;
    use jus_report_core::platform::platform_info_providers;
    use rstest::rstest;

    #[rstest]
    fn mock_platform_is_registered() {
        let names: Vec<_> = platform_info_providers().map(|p| p.platform_name()).collect();
        assert!(names.contains(&PLATFORM_NAME));
    }

    #[rstest]
    fn version_is_deterministic() {
        assert_eq!(platform_info_provider().os_version().expect("version"), OS_VERSION);
    }
}
