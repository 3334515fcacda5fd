//! Additional, more convenient, functionality, which leverages the Rust
//! standard library, layered on top of [`semitok_core`].
//!
//! This crate:
//!
//! * Re-exports all of [`semitok_core`], so the lazy, zero-copy [`Tokenizer`]
//! is available from here too.
//!
//! * Provides [ready-made functions](common/inmem/index.html) for the common
//! cases of splitting an in-memory string all at once, into a `Vec` of `&str`,
//! a [`FragmentVec`], or owned `String`s.
//!
//! * Provides [`FragmentVec`], a collected sequence of [`Fragment`]s for when
//! the fragments need to be traversed more than once or accessed randomly
//! without rescanning the expression.
//!
//! Prefer iterating a `Tokenizer` directly when only a single pass is needed,
//! or when it might be abandoned early, since that does no allocation.
//!
//! [`semitok_core`]: ../semitok_core/index.html
//! [`Tokenizer`]: ../semitok_core/tokenizer/struct.Tokenizer.html
//! [`Fragment`]: ../semitok_core/struct.Fragment.html
//! [`FragmentVec`]: fragment_vec/struct.FragmentVec.html


// Re-export everything from the core crate.
#[doc(no_inline)]
pub use semitok_core::*;

/// Functions, provided for convenience, that use the default classifier, or a
/// given one, to split whole in-memory strings eagerly.
pub mod common {
    pub mod inmem;
}

pub mod fragment_vec;
pub use fragment_vec::FragmentVec;
