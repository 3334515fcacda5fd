//! A zero-copy view of the text to be split.

use crate::Error;


/// An immutable view, as a start offset and a length, into an externally owned
/// source string.  It is never copied nor mutated; only the view's bounds are
/// held alongside the borrow of the whole source.
///
/// The whole source is kept, rather than only the viewed slice, so that the
/// [`Fragment`](struct.Fragment.html)s split from a view can report their
/// offsets relative to the original buffer.
///
/// Invariant: `start + len <= src.len()`, and both edges are on `char`
/// boundaries.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Expression<'s> {
    src: &'s str,
    start: usize,
    len: usize,
}

impl<'s> Expression<'s> {
    /// Make a view of the entirety of `src`.
    #[inline]
    pub fn new(src: &'s str) -> Self {
        Self {
            src,
            start: 0,
            len: src.len(),
        }
    }

    /// Make a view of the `len` bytes of `src` beginning at byte offset
    /// `start`.  Returns an `Err` if that is not within `src` or does not begin
    /// and end on `char` boundaries.
    pub fn from_view(src: &'s str, start: usize, len: usize) -> Result<Self, Error> {
        let out_of_bounds = Error::OutOfBounds { start, len, src_len: src.len() };
        let end = start.checked_add(len).ok_or(out_of_bounds)?;
        if end > src.len() {
            return Err(out_of_bounds)
        }
        for index in [start, end] {
            if !src.is_char_boundary(index) {
                return Err(Error::NotCharBoundary { index })
            }
        }
        Ok(Self { src, start, len })
    }

    /// The viewed text.
    #[inline]
    pub fn as_str(&self) -> &'s str {
        &self.src[self.start .. self.end()]
    }

    /// The entire original source string that this views into.
    #[inline]
    pub fn src(&self) -> &'s str {
        self.src
    }

    /// Byte offset, into `src`, of the start of the view.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte length of the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Byte offset, into `src`, just past the end of the view.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Predicate for if the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'s> From<&'s str> for Expression<'s> {
    #[inline]
    fn from(src: &'s str) -> Self {
        Self::new(src)
    }
}
