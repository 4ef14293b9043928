use std::fmt;

use protobuf::reflect::{
    EnumDescriptor, FieldDescriptor, MessageDescriptor, RuntimeFieldType, RuntimeType,
};

use super::errors::SchemaError;

/// How a field takes part in the reflective walks.
#[derive(Debug, Clone)]
pub enum FieldKind {
    Enum(EnumDescriptor),
    Int32,
    UInt32,
    Bool,
    Nested(MessageDescriptor),
}

/// One classified field of a record type.
#[derive(Clone)]
pub struct FieldSpec {
    pub field: FieldDescriptor,
    pub kind: FieldKind,
    /// Field carries a presence flag (proto2 `optional`).
    pub optional: bool,
}

impl FieldSpec {
    pub fn name(&self) -> &str {
        self.field.name()
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("field", &self.field.full_name())
            .field("kind", &self.kind)
            .field("optional", &self.optional)
            .finish()
    }
}

/// Classifies every field of `descriptor` in declaration order.
///
/// Fails on the first field no walk knows how to handle, before anything has
/// been touched.
pub fn classify(descriptor: &MessageDescriptor) -> Result<Vec<FieldSpec>, SchemaError> {
    descriptor
        .fields()
        .map(|field| {
            let kind = classify_field(descriptor, &field)?;
            let optional = !field.is_required();
            Ok(FieldSpec {
                field,
                kind,
                optional,
            })
        })
        .collect()
}

/// Upper bound on the encoded size of a record of this type with every field
/// present at its widest value.
///
/// Enums and int32 take ten varint bytes (negative values are sign-extended),
/// uint32 five, bool one. Each field adds its tag; nested records add a
/// length prefix.
pub fn max_encoded_size(descriptor: &MessageDescriptor) -> Result<usize, SchemaError> {
    let mut total = 0;
    for spec in classify(descriptor)? {
        let value = match &spec.kind {
            FieldKind::Enum(_) | FieldKind::Int32 => 10,
            FieldKind::UInt32 => 5,
            FieldKind::Bool => 1,
            FieldKind::Nested(nested) => {
                let inner = max_encoded_size(nested)?;
                inner + varint_len(inner as u64)
            }
        };
        let tag = (spec.field.number() as u64) << 3;
        total += varint_len(tag) + value;
    }
    Ok(total)
}

fn varint_len(value: u64) -> usize {
    (64 - (value | 1).leading_zeros() as usize).div_ceil(7)
}

fn classify_field(
    descriptor: &MessageDescriptor,
    field: &FieldDescriptor,
) -> Result<FieldKind, SchemaError> {
    let unsupported = |construct: &'static str| SchemaError::Unsupported {
        field: format!("{}.{}", descriptor.full_name(), field.name()),
        construct,
    };

    let runtime_type = match field.runtime_field_type() {
        RuntimeFieldType::Singular(t) => t,
        RuntimeFieldType::Repeated(_) => return Err(unsupported("repeated")),
        RuntimeFieldType::Map(..) => return Err(unsupported("map")),
    };

    match runtime_type {
        RuntimeType::Enum(e) => Ok(FieldKind::Enum(e)),
        RuntimeType::I32 => Ok(FieldKind::Int32),
        RuntimeType::U32 => Ok(FieldKind::UInt32),
        RuntimeType::I64 | RuntimeType::U64 => Err(unsupported("64-bit integer")),
        RuntimeType::Bool => Ok(FieldKind::Bool),
        RuntimeType::Message(m) => Ok(FieldKind::Nested(m)),
        RuntimeType::F32 | RuntimeType::F64 => Err(unsupported("floating point")),
        RuntimeType::String => Err(unsupported("string")),
        RuntimeType::VecU8 => Err(unsupported("bytes")),
    }
}
