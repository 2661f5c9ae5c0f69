use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use anyhow::Context;
use keyconv_chain::{ConversionOutput, ConversionRequest, ConvertConfig, ConvertError, Converter, Rendered};

use crate::cli::Cli;

/// Run one conversion and print the result to stdout.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let request = build_request(cli)?;
    let output = Converter::new(config).run(&request)?;

    let stdout = io::stdout();
    let terminal = stdout.is_terminal();
    let mut out = stdout.lock();
    write_output(&output, cli.json, terminal, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Stable tag printed in front of an error message.
pub fn error_tag(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<ConvertError>() {
        Some(err) => err.kind().as_str(),
        None => "io",
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ConvertConfig> {
    let Some(path) = path else {
        return Ok(ConvertConfig::default());
    };
    let source = fs::read_to_string(path).map_err(|e| {
        ConvertError::Config(format!("cannot read {}: {e}", path.display()))
    })?;
    let config = ConvertConfig::from_toml_str(&source)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

fn build_request(cli: &Cli) -> anyhow::Result<ConversionRequest> {
    let input = match (&cli.input, &cli.input_file) {
        (Some(text), _) => text.as_bytes().to_vec(),
        (None, Some(path)) => fs::read(path)
            .with_context(|| format!("cannot read input file {}", path.display()))?,
        (None, None) => anyhow::bail!("one of --input or --input-file is required"),
    };
    let mut request = ConversionRequest::new(cli.input_type, cli.input_format, input, cli.output_type);
    request.output_format = cli.output_format;
    request.compression = cli.public_key_compression.to_override();
    Ok(request)
}

fn write_output(
    output: &ConversionOutput,
    json: bool,
    terminal: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if json {
        let object: serde_json::Map<String, serde_json::Value> = output
            .entries()
            .iter()
            .map(|r| (r.label(), serde_json::Value::String(json_value(r))))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &object)?;
        writeln!(out)?;
        return Ok(());
    }
    match output {
        ConversionOutput::Single(rendered) => {
            out.write_all(&rendered.data)?;
            if terminal && rendered.format.is_text() {
                writeln!(out)?;
            }
        }
        ConversionOutput::All(entries) => {
            for rendered in entries {
                write!(out, "{}:", rendered.label())?;
                out.write_all(&rendered.data)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

/// Text for a JSON value; raw bytes are shown as hex.
fn json_value(rendered: &Rendered) -> String {
    match rendered.as_text() {
        Some(text) => text.to_string(),
        None => hex::encode(&rendered.data),
    }
}
