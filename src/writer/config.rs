use serde::{Deserialize, Serialize};

/// Output encoding of a conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Self-describing binary record stream
    #[default]
    Binary,
    /// One JSON object per line
    Json,
}

/// Configuration for record stream writers
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Output encoding
    pub format: OutputFormat,

    /// Capacity of the output buffer in bytes
    pub buffer_capacity: usize,

    /// Flush after every unit instead of only when the buffer fills.
    /// Useful when the output feeds an interactive pipe.
    pub flush_each_record: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Binary,
            // 64 KiB
            buffer_capacity: 64 * 1024,
            flush_each_record: false,
        }
    }
}

impl WriterConfig {
    /// Configuration for the JSON lines sink
    pub fn json() -> Self {
        Self {
            format: OutputFormat::Json,
            ..Self::default()
        }
    }

    /// Configuration that makes every record visible downstream immediately
    pub fn interactive() -> Self {
        Self {
            buffer_capacity: 8 * 1024,
            flush_each_record: true,
            ..Self::default()
        }
    }
}
