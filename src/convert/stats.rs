use std::fmt;

use crate::writer::WriterStats;

/// Statistics from a completed conversion run
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Records read, header included
    pub lines_read: u64,
    /// Data rows converted
    pub records_converted: u64,
    /// Distinct record types seen
    pub record_types: usize,
    /// Statistics reported by the writer
    pub writer: WriterStats,
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Converted {} records from {} lines into {} record types ({} bytes)",
            self.records_converted, self.lines_read, self.record_types, self.writer.bytes_written
        )
    }
}
