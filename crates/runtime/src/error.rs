use jus_report_core::channel::ChannelError;
use thiserror::Error;

/// Errors raised while assembling the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no platform info provider registered for this target")]
    NoPlatformProvider,
    #[error(transparent)]
    Channel(#[from] ChannelError),
}
