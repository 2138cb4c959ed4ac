/// Returns true iff `permutation` is a bijective mapping within the 0..len range.
///
/// Accepts any mapping and always returns a definite answer in O(len) time,
/// using a transient marker of length `len`. Mainly intended to validate
/// untrusted input before handing it to the cycle printer.
pub fn is_permutation_with<P>(len: usize, permutation: P) -> bool
where
    P: Fn(usize) -> usize,
{
    let mut seen = vec![false; len];

    for i in 0..len {
        let value = permutation(i);

        // Out of bounds, or a value that occurred earlier.
        if value >= len || seen[value] {
            return false;
        }
        seen[value] = true;
    }

    true
}

/// Returns true iff the slice is a bijective mapping within the 0..perm.len() range.
pub fn is_permutation(perm: &[usize]) -> bool {
    is_permutation_with(perm.len(), |i| perm[i])
}
