//! The items produced by splitting.

use core::fmt;


/// One trimmed, non-empty, top-level piece of an expression.  It is a borrowed
/// sub-slice of the original source string, and it knows the byte offset in
/// that source where it starts.  This is zero-copy.
///
/// The `Default` value is the empty span at offset 0, which is what
/// [`Iter::current`](struct.Iter.html#method.current) gives when there is no
/// current fragment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Fragment<'s> {
    val: &'s str,
    start: usize,
}

impl<'s> Fragment<'s> {
    #[inline]
    pub(crate) fn new(val: &'s str, start: usize) -> Self {
        Self { val, start }
    }

    /// The fragment's text.
    #[inline]
    pub fn as_str(&self) -> &'s str {
        self.val
    }

    /// Byte offset of the start of the fragment, relative to the original
    /// source string (not to the `Expression` view it was split from).
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte length.
    #[inline]
    pub fn len(&self) -> usize {
        self.val.len()
    }

    /// Byte offset just past the end of the fragment, relative to the original
    /// source string.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.val.len()
    }

    /// Only the `Default` fragment is empty.  Fragments yielded by iteration
    /// never are.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.val.is_empty()
    }
}

impl fmt::Display for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.val)
    }
}

impl AsRef<str> for Fragment<'_> {
    #[inline]
    fn as_ref(&self) -> &str {
        self.val
    }
}

/// Compares only the text, not the position.
impl PartialEq<str> for Fragment<'_> {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.val == other
    }
}

/// Compares only the text, not the position.
impl PartialEq<&str> for Fragment<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.val == *other
    }
}
