//! Index arithmetic for closed sequences.

/// Maps a signed index onto `[0, len)` treating the sequence as circular.
///
/// `len` must be non-zero.
#[inline]
pub(crate) fn wrap_index(idx: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    idx.rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::wrap_index;

    #[test]
    fn wrap_index_handles_negative_and_overflowing_indices() {
        assert_eq!(wrap_index(-1, 5), 4);
        assert_eq!(wrap_index(5, 5), 0);
        assert_eq!(wrap_index(-11, 5), 4);
        assert_eq!(wrap_index(23, 5), 3);
        assert_eq!(wrap_index(0, 1), 0);
    }
}
