use std::fmt;

/// Statistics from a completed write operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterStats {
    /// Number of descriptor units written
    pub descriptors_written: usize,
    /// Number of records written
    pub records_written: usize,
    /// Total bytes written to the sink
    pub bytes_written: u64,
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} records using {} record types ({} bytes)",
            self.records_written, self.descriptors_written, self.bytes_written
        )
    }
}
