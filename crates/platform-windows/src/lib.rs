//! Windows platform info backend for jus-report.
//!
//! Registers a provider that labels the host as `"Windows"` and reads the
//! OS version via `RtlGetVersion`, which reports the real version without
//! the compatibility shimming of `GetVersionExW`.

#[cfg(target_os = "windows")]
mod info;

#[cfg(not(target_os = "windows"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowsPlatformStub;
