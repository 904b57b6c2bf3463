use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{self, Read, Write};

use cz::convert::{convert, ConversionConfig};
use cz::infer::ParseMode;
use cz::writer::{OutputFormat, WriterConfig};

use super::config::Config;
use super::ConvertArgs;

/// Convert delimited text to a record stream
pub fn run(args: ConvertArgs) -> Result<()> {
    let config = build_config(&args)?;

    let input: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open input: {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    info!(
        "Input:  {}",
        args.input
            .as_ref()
            .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
    );
    info!(
        "Output: {}",
        args.output
            .as_ref()
            .map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string())
    );
    info!("Format: {:?}", config.writer_config.format);
    if config.parse_mode == ParseMode::StringsOnly {
        info!("Strings-only mode: type inference disabled");
    }

    let stats = convert(input, output, &config).context("Conversion failed")?;

    info!("Conversion complete!");
    info!("  {}", stats);
    info!("  {}", stats.writer);

    Ok(())
}

/// Merge the config file (if any) with command-line flags
fn build_config(args: &ConvertArgs) -> Result<ConversionConfig> {
    let file = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let section = file.conversion;

    let mut writer_config = WriterConfig::default();
    writer_config.format = args
        .format
        .map(OutputFormat::from)
        .or(section.format)
        .unwrap_or_default();
    writer_config.flush_each_record = args.flush || section.flush_each_record.unwrap_or(false);
    if let Some(capacity) = section.buffer_capacity {
        writer_config.buffer_capacity = capacity;
    }

    let strings_only = args.strings_only || section.strings_only.unwrap_or(false);
    let parse_mode = if strings_only {
        ParseMode::StringsOnly
    } else {
        ParseMode::Infer
    };

    let delimiter = match args.delimiter.or(section.delimiter) {
        Some(c) if c.is_ascii() => c as u8,
        Some(c) => anyhow::bail!("Delimiter must be a single ASCII character, got {:?}", c),
        None => b',',
    };

    Ok(ConversionConfig {
        parse_mode,
        delimiter,
        writer_config,
    })
}
