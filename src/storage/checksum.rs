/// Nibble lookup table for the reflected CRC-32 polynomial 0xEDB88320.
/// Entry `i` is the CRC register after shifting the 4-bit value `i` through.
#[rustfmt::skip]
const NIBBLE_TABLE: [u32; 16] = [
    0x0000_0000, 0x1db7_1064, 0x3b6e_20c8, 0x26d9_30ac,
    0x76dc_4190, 0x6b6b_51f4, 0x4db2_6158, 0x5005_713c,
    0xedb8_8320, 0xf00f_9344, 0xd6d6_a3e8, 0xcb61_b38c,
    0x9b64_c2b0, 0x86d3_d2d4, 0xa00a_e278, 0xbdbd_f21c,
];

/// CRC-32 (reflected, init all-ones, final complement) over `data`.
///
/// Processes four bits per table lookup, low nibble first. The result is
/// identical to the byte-table CRC-32 used by zlib, but this exact table shape
/// is what existing images were written with, so keep it.
pub fn crc32(data: &[u8]) -> u32 {
    let mut state = 0xFFFF_FFFFu32;

    for &byte in data {
        let index = (state ^ byte as u32) & 0x0F;
        state = NIBBLE_TABLE[index as usize] ^ (state >> 4);
        let index = (state ^ (byte >> 4) as u32) & 0x0F;
        state = NIBBLE_TABLE[index as usize] ^ (state >> 4);
    }

    !state
}
