use std::io::{self, Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use super::EncodingError;
use crate::infer::{ScalarType, ScalarValue};
use crate::schema::{Column, RecordType, TypeId};

/// Decode a record payload produced by [`RecordBuilder::encode`](super::RecordBuilder::encode)
pub fn decode_record(
    payload: &[u8],
    record_type: &RecordType,
) -> Result<Vec<ScalarValue>, EncodingError> {
    let mut cursor = Cursor::new(payload);
    let mut values = Vec::with_capacity(record_type.len());

    for ty in record_type.types() {
        let value = match ty {
            ScalarType::Float64 => ScalarValue::Float64(cursor.read_f64::<LittleEndian>().map_err(eof)?),
            ScalarType::Bool => match cursor.read_u8().map_err(eof)? {
                0 => ScalarValue::Bool(false),
                1 => ScalarValue::Bool(true),
                other => return Err(EncodingError::InvalidBool(other)),
            },
            ScalarType::String => ScalarValue::String(read_str(&mut cursor)?),
            ScalarType::Null => ScalarValue::Null,
        };
        values.push(value);
    }

    ensure_consumed(&cursor)?;
    Ok(values)
}

/// Decode a descriptor payload into the record type registered under `id`
pub fn decode_descriptor(id: TypeId, payload: &[u8]) -> Result<RecordType, EncodingError> {
    let mut cursor = Cursor::new(payload);
    let count = cursor.read_u32::<LittleEndian>().map_err(eof)? as usize;

    // Each column needs at least five bytes; cap the reservation accordingly.
    let mut columns = Vec::with_capacity(count.min(payload.len() / 5));
    for _ in 0..count {
        let name = read_str(&mut cursor)?;
        let code = cursor.read_u8().map_err(eof)?;
        let ty = ScalarType::from_code(code).ok_or(EncodingError::InvalidTypeCode(code))?;
        columns.push(Column { name, ty });
    }

    ensure_consumed(&cursor)?;
    Ok(RecordType::from_columns(id, columns))
}

fn read_str(cursor: &mut Cursor<&[u8]>) -> Result<String, EncodingError> {
    let len = cursor.read_u32::<LittleEndian>().map_err(eof)? as usize;
    let remaining = cursor.get_ref().len() - cursor.position() as usize;
    if len > remaining {
        return Err(EncodingError::UnexpectedEof);
    }

    let mut bytes = vec![0u8; len];
    cursor.read_exact(&mut bytes).map_err(eof)?;
    Ok(String::from_utf8(bytes)?)
}

fn ensure_consumed(cursor: &Cursor<&[u8]>) -> Result<(), EncodingError> {
    let trailing = cursor.get_ref().len() - cursor.position() as usize;
    if trailing > 0 {
        return Err(EncodingError::TrailingBytes(trailing));
    }
    Ok(())
}

// Reads from an in-memory cursor only fail by running out of bytes.
fn eof(_: io::Error) -> EncodingError {
    EncodingError::UnexpectedEof
}
