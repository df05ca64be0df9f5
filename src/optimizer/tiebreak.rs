//! Deterministic tie-breaking.
//!
//! A seeded polynomial rolling hash over `"{seed}:{faculty_id}:{section_id}"`,
//! used strictly as the last tie-break key when ranking candidates. Given
//! the same seed and input, the optimizer produces byte-identical output on
//! every run.

/// Seed used when the caller supplies none, zero, or a negative value.
pub const DEFAULT_SEED: i64 = 42;

const HASH_MULTIPLIER: u64 = 31;

/// Normalizes a caller-supplied seed. Absent or non-positive seeds fall
/// back to [`DEFAULT_SEED`].
pub fn normalize_seed(seed: Option<i64>) -> i64 {
    match seed {
        Some(s) if s > 0 => s,
        _ => DEFAULT_SEED,
    }
}

/// Hashes a (seed, faculty, section) triple to a tie-break key.
pub fn tie_break_hash(seed: i64, faculty_id: &str, section_id: &str) -> u64 {
    let key = format!("{seed}:{faculty_id}:{section_id}");
    let mut hash: u64 = 0;
    for byte in key.bytes() {
        hash = hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u64::from(byte));
    }
    hash
}
