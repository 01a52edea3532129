//! Ordinal text helpers used for converter-key matching and chain
//! fingerprinting. All comparisons are case-sensitive and byte-exact.

/// True iff `suffix` is non-empty, no longer than `subject`, and equal to
/// the trailing substring of `subject` of its own length.
///
/// Unlike `str::ends_with`, an empty suffix answers `false`.
pub fn ends_with_suffix(subject: &str, suffix: &str) -> bool {
    !suffix.is_empty() && suffix.len() <= subject.len() && subject.ends_with(suffix)
}

/// True iff `prefix` is non-empty and `subject` contains `prefix` exactly
/// at byte offset `position` (default 0).
///
/// The start position is bounded by the PREFIX length: any `position >=
/// prefix.len()` answers `false`, whatever the subject's length. Positions
/// out of bounds for the subject, or not on a char boundary, answer
/// `false`.
pub fn starts_with_prefix(subject: &str, prefix: &str, position: Option<usize>) -> bool {
    let position = position.unwrap_or(0);
    !prefix.is_empty()
        && position < prefix.len()
        && subject.get(position..position + prefix.len()) == Some(prefix)
}

/// Deterministic 32-bit hash of a string: `acc = 31 * acc + unit`,
/// truncated to `i32` after every UTF-16 code unit.
///
/// `""` hashes to 0 and `"a"` to 97. Collisions across distinct strings
/// are expected; equal strings always hash equal.
pub fn hash_code(subject: &str) -> i32 {
    let mut result: i32 = 0;
    for unit in subject.encode_utf16() {
        result = result.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    result
}
