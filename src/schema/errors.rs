use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The reflective walks only understand enums, 32-bit integers, bools
    /// and nested records. Anything else cannot be presence-filled, dumped or
    /// mutated and is treated as a schema defect.
    #[error("Unsupported field '{field}': {construct} fields are not handled.")]
    Unsupported {
        field: String,
        construct: &'static str,
    },
}
