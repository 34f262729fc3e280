//! Linux platform info backend for jus-report.
//!
//! Registers a provider that labels the host as `"Linux"` and reads the
//! kernel release from procfs.

#[cfg(target_os = "linux")]
mod info;

#[cfg(not(target_os = "linux"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinuxPlatformStub;
