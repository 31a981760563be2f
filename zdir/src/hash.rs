/// Seed of the path hash, all bits set
pub const SEED: u32 = 0xFFFF_FFFF;

/// Hash a path the way directory files key their records.
///
/// Base-33 rolling hash seeded with [`SEED`]. Input is raw bytes widened as
/// unsigned values, so non-ASCII names hash identically however they are
/// encoded on the caller side.
pub fn name_hash(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(SEED, |hash, &b| hash.wrapping_mul(33).wrapping_add(b as u32))
}
