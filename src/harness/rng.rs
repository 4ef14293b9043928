/// Marsaglia's KISS generator: an LCG, a xorshift and a multiply-with-carry
/// stream summed together. Not suitable for anything security related.
#[derive(Debug, Clone)]
pub struct KissRng {
    x: u32,
    y: u32,
    z: u32,
    c: u32,
}

impl KissRng {
    pub fn new(seed: u32) -> Self {
        Self {
            x: seed,
            y: 362_436_000,
            z: 521_288_629,
            c: 7_654_321,
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.x = self.x.wrapping_mul(69_069).wrapping_add(12_345);

        self.y ^= self.y << 13;
        self.y ^= self.y >> 17;
        self.y ^= self.y << 5;

        let t = 698_769_069u64 * self.z as u64 + self.c as u64;
        self.c = (t >> 32) as u32;
        self.z = t as u32;

        self.x.wrapping_add(self.y).wrapping_add(self.z)
    }
}
