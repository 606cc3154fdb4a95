//! Defines the sequence key contract consumed by the trie.
use crate::util::{char_offset, prefix_match};

/// An immutable, totally ordered sequence of symbols that the trie can split
/// into fragments and glue back together.
///
/// Implementations must uphold:
///
/// - `slice` never panics for `0 <= start <= end <= len()`, and
///   `slice(0, 0)` is the canonical empty key.
/// - `slice(0, k).concat(&slice(k, len())) == self` for every `k <= len()`.
/// - `common_prefix_len` gives the same answer whichever key is the receiver.
/// - `Ord` agrees with lexicographic symbol order.
pub trait SequenceKey: Clone + Ord {
    /// Returns the number of symbols in the key.
    fn len(&self) -> usize;

    /// Returns a new key over the half-open symbol range `start..end`.
    ///
    /// Bounds past the end of the key are clamped.
    fn slice(&self, start: usize, end: usize) -> Self;

    /// Returns the symbol-wise concatenation of `self` and `other`.
    fn concat(&self, other: &Self) -> Self;

    /// Returns the number of leading symbols shared by `self` and `other`.
    ///
    /// `0` means the keys share no prefix at all.
    fn common_prefix_len(&self, other: &Self) -> usize;

    /// Returns `true` if the key holds no symbols.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the key with its first `start` symbols dropped.
    fn suffix(&self, start: usize) -> Self {
        self.slice(start, self.len())
    }

    /// Returns the canonical empty key of this type.
    fn empty(&self) -> Self {
        self.slice(0, 0)
    }
}

/// Character keys. Symbols are `char`s, so slicing never lands inside a
/// multi-byte code point.
impl SequenceKey for String {
    fn len(&self) -> usize {
        self.chars().count()
    }

    fn slice(&self, start: usize, end: usize) -> Self {
        let end = char_offset(self, end);
        let start = char_offset(self, start).min(end);
        self[start..end].to_string()
    }

    fn concat(&self, other: &Self) -> Self {
        let mut joined = String::with_capacity(self.len() + other.len());
        joined.push_str(self);
        joined.push_str(other);
        joined
    }

    fn common_prefix_len(&self, other: &Self) -> usize {
        self.chars()
            .zip(other.chars())
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

/// Keys over arbitrary ordered symbols, e.g. `Vec<u8>` or token ids.
impl<T: Clone + Ord> SequenceKey for Vec<T> {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(<[T]>::len(self));
        let start = start.min(end);
        self[start..end].to_vec()
    }

    fn concat(&self, other: &Self) -> Self {
        let mut joined = Vec::with_capacity(<[T]>::len(self) + <[T]>::len(other));
        joined.extend_from_slice(self);
        joined.extend_from_slice(other);
        joined
    }

    fn common_prefix_len(&self, other: &Self) -> usize {
        prefix_match(self.as_slice(), other.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_len_counts_chars() {
        assert_eq!(SequenceKey::len(&"hello".to_string()), 5);
        assert_eq!(SequenceKey::len(&"naïve".to_string()), 5);
        assert!(SequenceKey::is_empty(&String::new()));
    }

    #[test]
    fn test_string_slice() {
        let key = "hello".to_string();
        assert_eq!(key.slice(1, 3), "el");
        assert_eq!(key.slice(0, 0), "");
        assert_eq!(key.slice(5, 5), "");
        assert_eq!(key.suffix(2), "llo");
        assert_eq!(key.empty(), "");
    }

    #[test]
    fn test_string_slice_multibyte() {
        let key = "añob".to_string();
        assert_eq!(key.slice(1, 3), "ño");
        assert_eq!(key.suffix(2), "ob");
    }

    #[test]
    fn test_string_slice_clamps_out_of_range() {
        let key = "abc".to_string();
        assert_eq!(key.slice(1, 10), "bc");
        assert_eq!(key.slice(7, 9), "");
    }

    #[test]
    fn test_string_concat_inverts_slice() {
        let key = "alphabet".to_string();
        for k in 0..=SequenceKey::len(&key) {
            assert_eq!(key.slice(0, k).concat(&key.suffix(k)), key);
        }
    }

    #[test]
    fn test_string_common_prefix_len() {
        let a = "alphabet".to_string();
        let b = "alpine".to_string();
        assert_eq!(a.common_prefix_len(&b), 3);
        assert_eq!(b.common_prefix_len(&a), 3);
        assert_eq!(a.common_prefix_len(&"zeta".to_string()), 0);
        assert_eq!(a.common_prefix_len(&String::new()), 0);
        assert_eq!(a.common_prefix_len(&a), 8);
    }

    #[test]
    fn test_vec_key() {
        let key = vec![1u8, 2, 3, 4];
        assert_eq!(SequenceKey::len(&key), 4);
        assert_eq!(key.slice(1, 3), vec![2, 3]);
        assert_eq!(key.concat(&vec![5]), vec![1, 2, 3, 4, 5]);
        assert_eq!(key.common_prefix_len(&vec![1, 2, 9]), 2);
        assert!(SequenceKey::is_empty(&key.empty()));
    }

    #[test]
    fn test_vec_key_ordering_is_lexicographic() {
        let a: Vec<u32> = vec![1, 2];
        let b: Vec<u32> = vec![1, 2, 0];
        let c: Vec<u32> = vec![1, 3];
        assert!(a < b);
        assert!(b < c);
    }
}
