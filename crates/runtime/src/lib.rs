//! Host-side runtime for jus-report.
//!
//! Stands in for the embedding application framework: it discovers the
//! registered method-channel plugins, binds each handler on its named
//! channel and routes incoming method calls to the bound handler.

mod error;
pub mod registry;
pub mod runtime;

pub use error::RuntimeError;
pub use registry::ChannelRegistry;
pub use runtime::Runtime;

// The plugin and the platform backend for the current target must be linked
// into the final binary for their inventory registrations to exist.
use jus_report as _;
#[cfg(target_os = "ios")]
use jus_report_platform_ios as _;
#[cfg(target_os = "linux")]
use jus_report_platform_linux as _;
#[cfg(target_os = "macos")]
use jus_report_platform_macos as _;
#[cfg(feature = "mock-platform")]
use jus_report_platform_mock as _;
#[cfg(target_os = "windows")]
use jus_report_platform_windows as _;
