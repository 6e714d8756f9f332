//! record/encode.rs
//!
//! Column values -> field writes.
//!
//! Column `i` is written under field number `i + 1`. Arrays and maps are a
//! length-delimited tag followed by:
//!
//! ```text
//! count            (bare varint, unchecksummed)
//! per element:
//!   is_null        (bool, unchecksummed)
//!   value          (no-tag primitive, checksummed; absent when null)
//! ```
//!
//! A map is its key array followed by its value array.

use crate::record::value::Value;
use crate::types::WriterError;
use crate::writer::RecordWriter;

/// Write one record's columns and close it with `end_record`.
///
/// Array and map elements are checked up front; a rejected record leaves
/// the writer untouched.
pub fn write_record(
    writer: &mut RecordWriter,
    fields: &[Option<Value>],
) -> Result<u32, WriterError> {
    for value in fields.iter().flatten() {
        check_elements(value)?;
    }

    for (i, value) in fields.iter().enumerate() {
        let Some(value) = value else { continue };
        write_field(writer, (i + 1) as u32, value)?;
    }

    Ok(writer.end_record())
}

fn check_elements(value: &Value) -> Result<(), WriterError> {
    let check = |v: &Option<Value>| match v {
        Some(v) if !v.is_primitive() => {
            Err(WriterError::NonPrimitiveElement { kind: v.kind() })
        }
        _ => Ok(()),
    };

    match value {
        Value::Array(items) => {
            element_count(items.len())?;
            items.iter().try_for_each(check)
        }
        Value::Map(entries) => {
            element_count(entries.len())?;
            entries.iter().try_for_each(|(k, v)| {
                check(k)?;
                check(v)
            })
        }
        _ => Ok(()),
    }
}

/// Array / map lengths travel as a `varint32`.
pub(crate) fn element_count(len: usize) -> Result<u32, WriterError> {
    u32::try_from(len).map_err(|_| WriterError::TooManyElements { len })
}

fn write_field(
    writer: &mut RecordWriter,
    field_number: u32,
    value: &Value,
) -> Result<(), WriterError> {
    match value {
        Value::Boolean(v) => writer.write_bool(field_number, *v),
        Value::Bigint(v) => writer.write_sint64(field_number, *v),
        Value::Double(v) => writer.write_double(field_number, *v),
        Value::Datetime(v) => writer.write_sint64(field_number, v.timestamp_millis()),
        Value::String(v) => writer.write_string(field_number, v),
        Value::Decimal(v) => writer.write_string(field_number, v.as_bytes()),
        Value::Array(items) => {
            writer.write_length_delimited_tag(field_number);
            write_array(writer, items.iter())?;
        }
        Value::Map(entries) => {
            writer.write_length_delimited_tag(field_number);
            write_array(writer, entries.iter().map(|(k, _)| k))?;
            write_array(writer, entries.iter().map(|(_, v)| v))?;
        }
    }
    Ok(())
}

fn write_array<'a, I>(writer: &mut RecordWriter, items: I) -> Result<(), WriterError>
where
    I: ExactSizeIterator<Item = &'a Option<Value>>,
{
    writer.write_varint32(element_count(items.len())?);
    for item in items {
        match item {
            None => writer.write_bool_no_tag_raw(true),
            Some(v) => {
                writer.write_bool_no_tag_raw(false);
                write_primitive(writer, v);
            }
        }
    }
    Ok(())
}

fn write_primitive(writer: &mut RecordWriter, value: &Value) {
    match value {
        Value::String(v) => writer.write_string_no_tag(v),
        Value::Bigint(v) => writer.write_sint64_no_tag(*v),
        Value::Double(v) => writer.write_double_no_tag(*v),
        Value::Boolean(v) => writer.write_bool_no_tag(*v),
        // rejected by check_elements before anything is written
        other => debug_assert!(false, "non-primitive element {}", other.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_count_fits_varint32() {
        assert_eq!(element_count(0).unwrap(), 0);
        assert_eq!(element_count(u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn element_count_past_u32_is_rejected() {
        let len = u32::MAX as usize + 1;
        assert!(matches!(
            element_count(len),
            Err(WriterError::TooManyElements { len: l }) if l == len
        ));
    }
}
