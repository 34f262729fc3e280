//! The jus_report plugin.
//!
//! Answers on the `"jus_report"` channel with a single recognized method,
//! `getPlatformVersion`, which returns the platform label and OS version
//! of the host (`"macOS 14.2"`, `"iOS 17.2"`, ...). Every other method
//! name yields the `NotImplemented` sentinel.

use std::sync::Arc;

use jus_report_core::channel::{
    ChannelError, ChannelErrorKind, MethodCall, MethodCallHandler, MethodChannelPlugin,
    MethodResult,
};
use jus_report_core::platform::{PlatformError, PlatformInfoProvider};
use jus_report_core::register_method_channel_plugin;
use once_cell::sync::OnceCell;

/// Channel identifier the plugin binds to.
pub const CHANNEL_NAME: &str = "jus_report";

/// The one recognized method name. Matching is exact and case-sensitive.
pub const GET_PLATFORM_VERSION: &str = "getPlatformVersion";

type MethodFn = fn(&PlatformVersionHandler, &MethodCall) -> Result<MethodResult, ChannelError>;

/// Dispatch table mapping recognized method names to handler functions.
/// Lookup misses fall through to the sentinel, so the supported surface
/// stays enumerable instead of hiding in match arms.
const METHOD_TABLE: &[(&str, MethodFn)] =
    &[(GET_PLATFORM_VERSION, PlatformVersionHandler::get_platform_version)];

static METHOD_NAMES: &[&str] = &[GET_PLATFORM_VERSION];

/// Handler bound on [`CHANNEL_NAME`], parameterized by the injected
/// platform descriptor (label + version accessor).
pub struct PlatformVersionHandler {
    platform: &'static dyn PlatformInfoProvider,
    version: OnceCell<String>,
}

impl PlatformVersionHandler {
    pub fn new(platform: &'static dyn PlatformInfoProvider) -> Self {
        Self { platform, version: OnceCell::new() }
    }

    /// OS version, read from the provider on first use. The version cannot
    /// change within a process run, so later calls reuse the first read.
    fn cached_version(&self) -> Result<&str, ChannelError> {
        self.version
            .get_or_try_init(|| self.platform.os_version())
            .map(String::as_str)
            .map_err(map_platform_error)
    }

    fn get_platform_version(&self, _call: &MethodCall) -> Result<MethodResult, ChannelError> {
        let version = self.cached_version()?;
        Ok(MethodResult::from(format!("{} {version}", self.platform.platform_name())))
    }
}

impl MethodCallHandler for PlatformVersionHandler {
    fn handle(&self, call: &MethodCall) -> Result<MethodResult, ChannelError> {
        match METHOD_TABLE.iter().find(|(name, _)| *name == call.method) {
            Some((_, method)) => method(self, call),
            None => {
                tracing::debug!(method = %call.method, "method not implemented");
                Ok(MethodResult::NotImplemented)
            }
        }
    }

    fn supported_methods(&self) -> &[&str] {
        METHOD_NAMES
    }
}

fn map_platform_error(err: PlatformError) -> ChannelError {
    ChannelError::new(
        ChannelErrorKind::PlatformUnavailable,
        format!("platform version unavailable: {err}"),
    )
}

/// Factory the runtime uses to bind the handler on its channel.
pub struct JusReportPlugin;

impl MethodChannelPlugin for JusReportPlugin {
    fn channel_name(&self) -> &'static str {
        CHANNEL_NAME
    }

    fn create_handler(
        &self,
        platform: &'static dyn PlatformInfoProvider,
    ) -> Result<Arc<dyn MethodCallHandler>, ChannelError> {
        Ok(Arc::new(PlatformVersionHandler::new(platform)))
    }
}

pub static JUS_REPORT_PLUGIN: JusReportPlugin = JusReportPlugin;

register_method_channel_plugin!(&JUS_REPORT_PLUGIN);

#[cfg(test)]
mod tests {
    use super::*;
    use jus_report_core::channel::method_channel_plugins;
    use jus_report_core::platform::PlatformErrorKind;
    use jus_report_platform_mock::platform_info_provider;
    use rstest::rstest;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn mock_handler() -> PlatformVersionHandler {
        PlatformVersionHandler::new(platform_info_provider())
    }

    #[rstest]
    fn recognized_method_returns_label_and_version() {
        let handler = mock_handler();
        let result =
            handler.handle(&MethodCall::new(GET_PLATFORM_VERSION)).expect("handler answers");
        assert_eq!(result.value(), Some(&json!("MockOS 1.0")));
    }

    #[rstest]
    #[case("unknownMethod")]
    #[case("")]
    #[case("getplatformversion")]
    #[case("GetPlatformVersion")]
    fn unrecognized_methods_hit_the_sentinel(#[case] method: &str) {
        let handler = mock_handler();
        let result = handler.handle(&MethodCall::new(method)).expect("handler answers");
        assert!(result.is_not_implemented());
    }

    #[rstest]
    fn arguments_are_accepted_and_ignored() {
        let handler = mock_handler();
        let call = MethodCall::new(GET_PLATFORM_VERSION).with_args(json!({"verbose": [1, 2, 3]}));
        let result = handler.handle(&call).expect("handler answers");
        assert_eq!(result.value(), Some(&json!("MockOS 1.0")));
    }

    struct CountingProvider {
        reads: AtomicUsize,
    }

    impl PlatformInfoProvider for CountingProvider {
        fn platform_name(&self) -> &'static str {
            "CountOS"
        }

        fn os_version(&self) -> Result<String, PlatformError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok("7.7".into())
        }
    }

    static COUNTING_PROVIDER: CountingProvider =
        CountingProvider { reads: AtomicUsize::new(0) };

    #[rstest]
    fn version_is_read_once_per_handler() {
        let handler = PlatformVersionHandler::new(&COUNTING_PROVIDER);
        for _ in 0..3 {
            let result =
                handler.handle(&MethodCall::new(GET_PLATFORM_VERSION)).expect("handler answers");
            assert_eq!(result.value(), Some(&json!("CountOS 7.7")));
        }
        assert_eq!(COUNTING_PROVIDER.reads.load(Ordering::SeqCst), 1);
    }

    struct FailingProvider;

    impl PlatformInfoProvider for FailingProvider {
        fn platform_name(&self) -> &'static str {
            "BrokenOS"
        }

        fn os_version(&self) -> Result<String, PlatformError> {
            Err(PlatformError::new(PlatformErrorKind::VersionUnavailable, "accessor offline"))
        }
    }

    static FAILING_PROVIDER: FailingProvider = FailingProvider;

    #[rstest]
    fn provider_failure_propagates_as_error_not_sentinel() {
        let handler = PlatformVersionHandler::new(&FAILING_PROVIDER);
        let err =
            handler.handle(&MethodCall::new(GET_PLATFORM_VERSION)).expect_err("accessor fails");
        assert_eq!(err.kind, ChannelErrorKind::PlatformUnavailable);
    }

    #[rstest]
    fn supported_surface_is_enumerable() {
        let handler = mock_handler();
        assert_eq!(handler.supported_methods(), &[GET_PLATFORM_VERSION]);
    }

    #[rstest]
    fn plugin_is_registered_for_its_channel() {
        assert!(method_channel_plugins().any(|plugin| plugin.channel_name() == CHANNEL_NAME));
    }

    #[rstest]
    fn plugin_builds_a_handler_for_the_injected_platform() {
        let handler =
            JUS_REPORT_PLUGIN.create_handler(platform_info_provider()).expect("handler");
        let result =
            handler.handle(&MethodCall::new(GET_PLATFORM_VERSION)).expect("handler answers");
        assert_eq!(result.value(), Some(&json!("MockOS 1.0")));
    }
}
