use crate::OutputFormat;
use crate::util::{CliResult, map_channel_error};
use jus_report_core::channel::{MethodCall, MethodResult};
use jus_report_runtime::Runtime;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize, Debug, PartialEq)]
struct CallSummary<'a> {
    channel: &'a str,
    method: &'a str,
    result: &'a MethodResult,
}

pub fn run(
    runtime: &Runtime,
    channel: &str,
    method: &str,
    args: Option<&str>,
    format: OutputFormat,
) -> CliResult<String> {
    let mut call = MethodCall::new(method);
    if let Some(raw) = args {
        call = call.with_args(serde_json::from_str::<Value>(raw)?);
    }

    let result = runtime.invoke(channel, &call).map_err(map_channel_error)?;
    Ok(match format {
        OutputFormat::Text => render_call_text(&result),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&CallSummary { channel, method, result: &result })?
        }
    })
}

fn render_call_text(result: &MethodResult) -> String {
    match result {
        MethodResult::Value(Value::String(text)) => text.clone(),
        MethodResult::Value(value) => value.to_string(),
        MethodResult::NotImplemented => "not implemented".to_owned(),
    }
}
