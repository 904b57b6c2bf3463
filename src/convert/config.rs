use crate::infer::ParseMode;
use crate::writer::WriterConfig;

/// Configuration for a conversion run
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Field inference mode for the whole run
    pub parse_mode: ParseMode,

    /// Field delimiter of the input
    pub delimiter: u8,

    /// Output writer settings
    pub writer_config: WriterConfig,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            parse_mode: ParseMode::Infer,
            delimiter: b',',
            writer_config: WriterConfig::default(),
        }
    }
}

impl ConversionConfig {
    /// Configuration that keeps every field as a string
    pub fn strings_only() -> Self {
        Self {
            parse_mode: ParseMode::StringsOnly,
            ..Self::default()
        }
    }

    /// Set the input delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the writer configuration
    pub fn with_writer_config(mut self, writer_config: WriterConfig) -> Self {
        self.writer_config = writer_config;
        self
    }
}
