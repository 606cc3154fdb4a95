/// Finds the length of the common prefix between two symbol slices.
///
/// Scans increasing prefix lengths and stops at the first mismatch, so the
/// result is the same whichever slice is passed first.
pub fn prefix_match<T: PartialEq>(key: &[T], node_key: &[T]) -> usize {
    key.iter()
        .zip(node_key.iter())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Converts a char index into a byte offset of `s`, clamped to `s.len()`.
pub fn char_offset(s: &str, idx: usize) -> usize {
    s.char_indices().nth(idx).map_or(s.len(), |(offset, _)| offset)
}
