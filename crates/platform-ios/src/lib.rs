//! iOS platform info backend for jus-report.
//!
//! Registers a provider that labels the host as `"iOS"` and reads the OS
//! version from `NSProcessInfo`.

#[cfg(target_os = "ios")]
mod info;

#[cfg(not(target_os = "ios"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IosPlatformStub;
