use crate::OutputFormat;
use crate::util::{CliResult, map_channel_error};
use jus_report::{CHANNEL_NAME, GET_PLATFORM_VERSION};
use jus_report_runtime::Runtime;
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq)]
struct VersionSummary {
    platform: String,
    platform_version: String,
}

pub fn run(runtime: &Runtime, format: OutputFormat) -> CliResult<String> {
    let result =
        runtime.invoke_method(CHANNEL_NAME, GET_PLATFORM_VERSION).map_err(map_channel_error)?;
    let Some(version) = result.value().and_then(|value| value.as_str()) else {
        return Err("the bound handler does not implement getPlatformVersion".into());
    };

    let summary = VersionSummary {
        platform: runtime.platform().platform_name().to_owned(),
        platform_version: version.to_owned(),
    };
    Ok(match format {
        OutputFormat::Text => summary.platform_version,
        OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
    })
}
