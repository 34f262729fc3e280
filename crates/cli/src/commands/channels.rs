use crate::OutputFormat;
use crate::util::CliResult;
use jus_report_runtime::Runtime;
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize, Debug, PartialEq)]
struct ChannelSummary {
    channel: String,
    methods: Vec<String>,
}

pub fn run(runtime: &Runtime, format: OutputFormat) -> CliResult<String> {
    let summaries: Vec<ChannelSummary> = runtime
        .channels()
        .map(|channel| ChannelSummary {
            channel: channel.to_owned(),
            methods: runtime
                .handler(channel)
                .map(|handler| {
                    handler.supported_methods().iter().map(|method| (*method).to_owned()).collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    Ok(match format {
        OutputFormat::Text => render_channels_text(&summaries),
        OutputFormat::Json => serde_json::to_string_pretty(&summaries)?,
    })
}

fn render_channels_text(channels: &[ChannelSummary]) -> String {
    if channels.is_empty() {
        return "no channels bound".to_owned();
    }

    let mut output = String::new();
    for summary in channels {
        let _ = writeln!(&mut output, "{}: {}", summary.channel, summary.methods.join(", "));
    }
    output.trim_end().to_owned()
}
