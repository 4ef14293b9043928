pub mod args;
pub mod entropy;
pub mod rng;

use log::debug;
use protobuf::reflect::{MessageDescriptor, ReflectValueBox};
use protobuf::{MessageDyn, MessageFull};

use crate::schema::descriptor::{FieldKind, classify};
use crate::schema::errors::SchemaError;
use entropy::EntropySource;
use rng::KissRng;

/// Exclusive upper bound for mutated integer values.
pub const INTEGER_RANGE: u32 = 64;

/// Randomly rewrites scalar fields of a record, the way a user poking at a
/// settings UI would, to drive save/load compatibility checks.
#[derive(Debug, Clone)]
pub struct MutationHarness {
    rng: KissRng,
    seed: u32,
}

impl MutationHarness {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: KissRng::new(seed),
            seed,
        }
    }

    pub fn from_entropy(source: &mut impl EntropySource) -> Self {
        let seed = source.seed();
        debug!("mutation seed 0x{:08X}", seed);
        Self::new(seed)
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Each scalar field is replaced, on an even draw, by a small value legal
    /// for its kind. Nested records are always descended into.
    ///
    /// The low bit of a KISS output only depends on the parity of the seed, so
    /// the set of fields picked in a pass is one of two fixed patterns rather
    /// than independent coin flips. Which pattern repeats shifts from pass to
    /// pass with the number of values drawn.
    pub fn mutate<S: MessageFull>(&mut self, record: &mut S) -> Result<(), SchemaError> {
        self.mutate_message(&S::descriptor(), record)
    }

    fn mutate_message(
        &mut self,
        descriptor: &MessageDescriptor,
        message: &mut dyn MessageDyn,
    ) -> Result<(), SchemaError> {
        for spec in classify(descriptor)? {
            if let FieldKind::Nested(nested) = &spec.kind {
                self.mutate_message(nested, spec.field.mut_message(message))?;
                continue;
            }

            if self.rng.next_u32() % 2 == 0 {
                let value = self.draw(&spec.kind);
                spec.field.set_singular_field(message, value);
            }
        }
        Ok(())
    }

    fn draw(&mut self, kind: &FieldKind) -> ReflectValueBox {
        let r = self.rng.next_u32();
        match kind {
            FieldKind::Enum(e) => {
                let variants: Vec<i32> = e.values().map(|v| v.value()).collect();
                let number = variants[r as usize % variants.len()];
                ReflectValueBox::Enum(e.clone(), number)
            }
            FieldKind::Int32 => ReflectValueBox::I32((r % INTEGER_RANGE) as i32),
            FieldKind::UInt32 => ReflectValueBox::U32(r % INTEGER_RANGE),
            FieldKind::Bool => ReflectValueBox::Bool(r % 2 != 0),
            FieldKind::Nested(_) => unreachable!("nested records are walked, not drawn"),
        }
    }
}
