//! Rendering of permutations in disjoint cycle notation.

use std::fmt;
use std::io;

use crate::is_permutation_with;

/// Core traversal, implemented once against a length plus index accessor and
/// a text sink. Cycles are emitted adjacently in increasing order of their
/// smallest element, so the output is canonical for a given mapping.
fn write_cycles<W, P>(out: &mut W, len: usize, permutation: P, offset: usize) -> fmt::Result
where
    W: fmt::Write,
    P: Fn(usize) -> usize,
{
    debug_assert!(
        is_permutation_with(len, &permutation),
        "The input is not a valid permutation."
    );

    let mut visited = vec![false; len];

    for start in 0..len {
        // Skip elements of an earlier cycle, and fixed points since cycles
        // of length one carry no information.
        if visited[start] || permutation(start) == start {
            continue;
        }

        write!(out, "({}", start + offset)?;
        visited[start] = true;

        let mut current = permutation(start);
        while current != start {
            write!(out, " {}", current + offset)?;
            visited[current] = true;
            current = permutation(current);
        }

        write!(out, ")")?;
    }

    Ok(())
}

/// Writes the permutation i -> permutation(i) on {0, ..., len - 1} in cycle
/// format to the given writer, and returns the number of bytes written. The
/// amount `offset` is added to each element before printing, e.g. the
/// permutation (2 4) is printed as (3 5) when `offset` is 1. Fixed points are
/// not printed, so the identity permutation yields zero bytes.
///
/// The input must be a valid permutation; this is only checked through a
/// debug assertion. Validate untrusted data with [is_permutation_with]
/// first, since following a cycle of a malformed mapping may not terminate.
pub fn print_permutation_with<W, P>(
    writer: &mut W,
    len: usize,
    permutation: P,
    offset: usize,
) -> io::Result<usize>
where
    W: io::Write,
    P: Fn(usize) -> usize,
{
    let mut counting = CountingWriter {
        inner: writer,
        written: 0,
        error: None,
    };

    match write_cycles(&mut counting, len, permutation, offset) {
        Ok(()) => Ok(counting.written),
        Err(fmt::Error) => Err(counting
            .error
            .unwrap_or_else(|| io::Error::other("formatter error"))),
    }
}

/// Writes the permutation `perm` of {0, ..., perm.len() - 1} in cycle format
/// to the given writer. See [print_permutation_with] for the offset handling
/// and the precondition on the input.
pub fn print_permutation<W>(writer: &mut W, perm: &[usize], offset: usize) -> io::Result<usize>
where
    W: io::Write,
{
    print_permutation_with(writer, perm.len(), |i| perm[i], offset)
}

/// Formats a permutation of {0, ..., perm.len() - 1} in cycle notation, e.g.
/// the permutation [1, 0, 3, 4, 2] is shown as "(0 1)(2 3 4)". Borrows the
/// slice for display purposes only.
pub struct CycleFormatter<'a> {
    perm: &'a [usize],
    offset: usize,
}

impl<'a> CycleFormatter<'a> {
    pub fn new(perm: &'a [usize]) -> Self {
        CycleFormatter { perm, offset: 0 }
    }

    /// Adds the given amount to every printed element, e.g. to show 1-based
    /// labels for a 0-based mapping.
    pub fn with_offset(perm: &'a [usize], offset: usize) -> Self {
        CycleFormatter { perm, offset }
    }
}

impl fmt::Display for CycleFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cycles(f, self.perm.len(), |i| self.perm[i], self.offset)
    }
}

/// Adapts an io writer into a fmt writer while counting the bytes written.
/// fmt::Error carries no payload, so the underlying io error is stashed
/// until the traversal returns.
struct CountingWriter<'a, W> {
    inner: &'a mut W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for CountingWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.inner.write_all(s.as_bytes()) {
            Ok(()) => {
                self.written += s.len();
                Ok(())
            }
            Err(error) => {
                self.error = Some(error);
                Err(fmt::Error)
            }
        }
    }
}
