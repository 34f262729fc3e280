use super::{ChannelError, MethodCall, MethodResult};

/// Receiver for method calls on a bound channel.
///
/// Handlers answer every call with exactly one [`MethodResult`]; a method
/// name outside [`supported_methods`](Self::supported_methods) yields the
/// [`MethodResult::NotImplemented`] sentinel. Errors are reserved for
/// ambient failures (an unreachable platform accessor), never for an
/// unrecognized method name.
pub trait MethodCallHandler: Send + Sync {
    fn handle(&self, call: &MethodCall) -> Result<MethodResult, ChannelError>;

    /// The method names this handler answers, for enumeration by hosts and
    /// diagnostics. Dispatch itself stays with [`handle`](Self::handle).
    fn supported_methods(&self) -> &[&str];
}
