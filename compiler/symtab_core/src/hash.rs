//! Bucket hash for variable names.

/// Map a name to its home bucket in a table of `capacity` slots.
///
/// Polynomial accumulation over the name's bytes (`h = h * 31 + b`) in
/// wrapping 32-bit arithmetic, reduced modulo `capacity`.
///
/// `capacity` must be non-zero; [`TableConfig`](crate::TableConfig) guarantees it.
#[inline]
pub fn hash_name(name: &str, capacity: usize) -> usize {
    let h = name
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)));
    h as usize % capacity
}
