use jus_report_core::channel::ChannelError;
use jus_report_runtime::RuntimeError;
use std::error::Error;

pub type CliResult<T> = Result<T, Box<dyn Error>>;

pub fn map_runtime_error(err: RuntimeError) -> Box<dyn Error> {
    Box::new(err)
}

pub fn map_channel_error(err: ChannelError) -> Box<dyn Error> {
    Box::new(err)
}
