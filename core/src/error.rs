//! Errors that might be returned when establishing an `Expression` view.
//!
//! Splitting itself never fails, so this is the only error type.


/// The possible errors of [`Expression::from_view`](struct.Expression.html#method.from_view).
#[derive(Copy, Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum Error {
    /// The view does not lie within its source string.  Also covers a
    /// `start + len` that overflows.
    #[error("view {start}+{len} is out of bounds of a source of length {src_len}")]
    OutOfBounds {
        /// Requested start offset.
        start: usize,
        /// Requested length.
        len: usize,
        /// Byte length of the source string.
        src_len: usize,
    },
    /// An edge of the view is inside a multi-byte UTF-8 sequence.
    #[error("view edge {index} is not on a char boundary")]
    NotCharBoundary {
        /// The offending byte offset into the source.
        index: usize,
    },
}
