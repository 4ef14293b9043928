use protobuf::reflect::{MessageDescriptor, ReflectValueRef};
use protobuf::{MessageDyn, MessageFull};

use super::descriptor::{FieldKind, classify};
use super::errors::SchemaError;

const INDENT: &str = "    ";

/// Renders `record` as indented, JSON-like text, one field per line in
/// declaration order. Absent fields show their default value.
pub fn dump<S: MessageFull>(record: &S) -> Result<String, SchemaError> {
    let mut out = String::new();
    dump_message(&mut out, &S::descriptor(), record, 0)?;
    out.push('\n');
    Ok(out)
}

fn dump_message(
    out: &mut String,
    descriptor: &MessageDescriptor,
    message: &dyn MessageDyn,
    level: usize,
) -> Result<(), SchemaError> {
    indent(out, level);
    out.push_str("{\n");

    let mut first = true;
    for spec in classify(descriptor)? {
        if !first {
            out.push_str(",\n");
        }
        first = false;

        indent(out, level + 1);
        let value = spec.field.get_singular_field_or_default(message);
        match (&spec.kind, value) {
            (FieldKind::Nested(nested), ReflectValueRef::Message(m)) => {
                out.push_str(&format!("\"{}\":\n", spec.name()));
                dump_message(out, nested, &*m, level + 1)?;
            }
            (_, value) => {
                out.push_str(&format!("\"{}\": {}", spec.name(), scalar_text(&value)));
            }
        }
    }

    out.push('\n');
    indent(out, level);
    out.push('}');
    Ok(())
}

fn scalar_text(value: &ReflectValueRef) -> String {
    match value {
        ReflectValueRef::Enum(_, v) => v.to_string(),
        ReflectValueRef::I32(v) => v.to_string(),
        ReflectValueRef::U32(v) => v.to_string(),
        ReflectValueRef::Bool(v) => v.to_string(),
        _ => unreachable!("classify only admits enum, 32-bit integer and bool scalars"),
    }
}

fn indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}
