//! macOS platform info backend for jus-report.
//!
//! Registers a provider that labels the host as `"macOS"` and reads the OS
//! version from `NSProcessInfo`, the same accessor host applications use.

#[cfg(target_os = "macos")]
mod info;

#[cfg(not(target_os = "macos"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacosPlatformStub;
