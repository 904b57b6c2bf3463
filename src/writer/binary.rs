use std::collections::HashSet;
use std::io::{BufWriter, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use super::{
    RecordSink, WriterConfig, WriterError, WriterStats, STREAM_MAGIC, UNIT_DESCRIPTOR, UNIT_RECORD,
};
use crate::encoding::RecordBuilder;
use crate::infer::ScalarValue;
use crate::schema::{RecordType, TypeId};

/// Bytes of unit framing before the payload: kind, type id, length
const UNIT_HEADER_LEN: u64 = 9;

/// Writer for the framed binary record stream.
///
/// The stream preamble is written on construction, so even an empty run
/// produces a valid stream.
pub struct BinaryWriter<W: Write> {
    out: BufWriter<W>,
    builder: RecordBuilder,
    declared: HashSet<TypeId>,
    config: WriterConfig,
    stats: WriterStats,
    finished: bool,
}

impl<W: Write> BinaryWriter<W> {
    /// Create a writer and emit the stream preamble
    pub fn new(writer: W, config: WriterConfig) -> Result<Self, WriterError> {
        let mut out = BufWriter::with_capacity(config.buffer_capacity, writer);
        out.write_all(&STREAM_MAGIC)?;

        Ok(Self {
            out,
            builder: RecordBuilder::new(),
            declared: HashSet::new(),
            config,
            stats: WriterStats {
                bytes_written: STREAM_MAGIC.len() as u64,
                ..WriterStats::default()
            },
            finished: false,
        })
    }

    /// Statistics so far
    pub fn stats(&self) -> &WriterStats {
        &self.stats
    }

    /// Finish the stream and return the underlying writer
    pub fn into_inner(mut self) -> Result<W, WriterError> {
        if !self.finished {
            self.finish()?;
        }
        self.out
            .into_inner()
            .map_err(|e| WriterError::IoError(e.into_error()))
    }

    fn check_open(&self) -> Result<(), WriterError> {
        if self.finished {
            return Err(WriterError::Finished);
        }
        Ok(())
    }

    fn after_unit(&mut self, payload_len: usize) -> Result<(), WriterError> {
        self.stats.bytes_written += UNIT_HEADER_LEN + payload_len as u64;
        if self.config.flush_each_record {
            self.out.flush()?;
        }
        Ok(())
    }
}

impl<W: Write> RecordSink for BinaryWriter<W> {
    fn write_descriptor(&mut self, record_type: &RecordType) -> Result<(), WriterError> {
        self.check_open()?;

        let payload = self.builder.encode_descriptor(record_type)?;
        let len = payload.len();
        write_unit(&mut self.out, UNIT_DESCRIPTOR, record_type.id(), payload)?;

        self.declared.insert(record_type.id());
        self.stats.descriptors_written += 1;
        self.after_unit(len)
    }

    fn write_record(
        &mut self,
        record_type: &RecordType,
        values: &[ScalarValue],
    ) -> Result<(), WriterError> {
        self.check_open()?;
        if !self.declared.contains(&record_type.id()) {
            return Err(WriterError::UndeclaredType(record_type.id()));
        }

        let payload = self.builder.encode(values, record_type)?;
        let len = payload.len();
        write_unit(&mut self.out, UNIT_RECORD, record_type.id(), payload)?;

        self.stats.records_written += 1;
        self.after_unit(len)
    }

    fn finish(&mut self) -> Result<WriterStats, WriterError> {
        self.check_open()?;
        self.out.flush()?;
        self.finished = true;
        Ok(self.stats.clone())
    }
}

fn write_unit<W: Write>(
    out: &mut W,
    kind: u8,
    id: TypeId,
    payload: &[u8],
) -> Result<(), WriterError> {
    let len = u32::try_from(payload.len()).map_err(|_| WriterError::UnitTooLarge(payload.len()))?;

    out.write_u8(kind)?;
    out.write_u32::<LittleEndian>(id.get())?;
    out.write_u32::<LittleEndian>(len)?;
    out.write_all(payload)?;
    Ok(())
}
