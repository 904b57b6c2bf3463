use anyhow::{Context, Result};
use log::info;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use cz::reader::{StreamEvent, StreamReader};
use cz::writer::record_to_json;

/// Render a binary record stream as JSON lines on stdout
pub fn run(file: Option<PathBuf>) -> Result<()> {
    let input: Box<dyn Read> = match &file {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open stream: {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };

    let reader = StreamReader::new(io::BufReader::new(input)).context("Failed to open stream")?;
    let mut out = BufWriter::new(io::stdout().lock());

    let mut records = 0usize;
    let mut descriptors = 0usize;
    for event in reader {
        let line = match event.context("Failed to decode stream")? {
            StreamEvent::Descriptor(record_type) => {
                descriptors += 1;
                json!({ "descriptor": &*record_type })
            }
            StreamEvent::Record {
                record_type,
                values,
            } => {
                records += 1;
                json!({
                    "type": record_type.id(),
                    "record": record_to_json(&record_type, &values),
                })
            }
        };
        serde_json::to_writer(&mut out, &line)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    info!("Read {} records using {} record types", records, descriptors);
    Ok(())
}
