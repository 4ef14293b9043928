/// Source of raw random bits used to seed the mutation generator.
pub trait EntropySource {
    fn random_bit(&mut self) -> bool;

    /// Assembles 32 bits, first sample in the most significant position.
    fn seed(&mut self) -> u32 {
        (0..32).fold(0u32, |acc, _| (acc << 1) | self.random_bit() as u32)
    }
}

/// Operating system randomness via `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn random_bit(&mut self) -> bool {
        rand::random::<bool>()
    }
}

/// Replays the bits of a fixed word, for reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy {
    value: u32,
    next_bit: u32,
}

impl FixedEntropy {
    pub fn new(value: u32) -> Self {
        Self { value, next_bit: 0 }
    }
}

impl EntropySource for FixedEntropy {
    fn random_bit(&mut self) -> bool {
        let bit = (self.value >> (31 - self.next_bit % 32)) & 1 == 1;
        self.next_bit = self.next_bit.wrapping_add(1);
        bit
    }
}
