pub mod errors;

use protobuf::reflect::{RuntimeFieldType, RuntimeType};
use protobuf::{Message, MessageDyn, UnknownFields};

use crate::schema::Schema;
use errors::CodecError;

/// Serialises the present fields of `record` in tag order.
///
/// Fails if the result would not fit the schema's maximum encoded size.
pub fn encode<S: Schema>(record: &S) -> Result<Vec<u8>, CodecError> {
    let capacity = S::max_encoded_size()?;
    let required = record.compute_size() as usize;
    if required > capacity {
        return Err(CodecError::BufferTooSmall { required, capacity });
    }

    record.write_to_bytes().map_err(CodecError::Encode)
}

/// Parses `bytes` into a fresh record.
///
/// Fields with tags this schema does not know are skipped and not retained,
/// so a record written by a newer generation loads cleanly and re-saves
/// without them. Fields missing from `bytes` stay at their defaults.
pub fn decode<S: Schema>(bytes: &[u8]) -> Result<S, CodecError> {
    let mut record = S::parse_from_bytes(bytes).map_err(CodecError::Decode)?;
    discard_unknown_fields(&mut record);
    Ok(record)
}

fn discard_unknown_fields(message: &mut dyn MessageDyn) {
    // Reset rather than clear: an emptied map still compares unequal to a
    // record that never had unknown fields.
    *message.mut_unknown_fields_dyn() = UnknownFields::new();

    let descriptor = message.descriptor_dyn();
    for field in descriptor.fields() {
        if let RuntimeFieldType::Singular(RuntimeType::Message(_)) = field.runtime_field_type()
            && field.has_field(message)
        {
            discard_unknown_fields(field.mut_message(message));
        }
    }
}
