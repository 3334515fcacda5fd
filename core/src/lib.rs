//! The core of a splitter for build-engine expressions.  An expression like
//! `@(Compile->'%(Filename).obj;x');$(Extra);;other` is broken into its
//! top-level fragments at the `;` characters, but the semicolons that occur
//! inside a parenthesized item-list reference (such as an item transform,
//! `@(name->'...')`, or an item separator, `@(name, '...')`) or inside a quoted
//! literal are left alone as literal content.
//!
//! Splitting is lazy and zero-copy.  A [`Tokenizer`] is an immutable, `Copy`
//! value wrapping one [`Expression`] view of a borrowed `&str`, and it can start
//! any number of independent [`Iter`]ations over it.  Each `Iter` yields
//! [`Fragment`]s, which are trimmed, non-empty sub-slices of the original
//! string that also know their byte offset in it.  Nothing is allocated, and a
//! caller may stop iterating at any point.
//!
//! The tokenizer is deliberately lenient.  It never fails: unbalanced
//! parentheses or an odd number of quotes only result in less splitting, with
//! whatever remains becoming the final fragment.  Validating the fragments is
//! left to whatever evaluates them.
//!
//! The characters that delimit fragments, open and close nests, quote
//! literals, and count as trimmable whitespace are determined by a
//! [`DelimiterClassifier`], so applications with other conventions can reuse
//! the same scanning.  [`DefaultClassifier`] gives the build-expression rules.
//!
//! This core crate is `no_std` and does no heap allocation.  The full crate
//! layers `std` conveniences on top of it.
//!
//! ```
//! use semitok_core::Tokenizer;
//!
//! let tokenizer = Tokenizer::new(" a ; @(Foo->'x;y') ;; b ");
//! let fragments: [&str; 3] = ["a", "@(Foo->'x;y')", "b"];
//! assert!(tokenizer.iter().map(|f| f.as_str()).eq(fragments));
//! ```
//!
//! [`DefaultClassifier`]: classifier/premade/struct.DefaultClassifier.html

#![no_std]

pub mod classifier;
pub use classifier::{DelimiterClassifier, premade::DefaultClassifier};

mod error;
pub use error::Error;

mod expression;
pub use expression::Expression;

mod fragment;
pub use fragment::Fragment;

pub mod tokenizer;
pub use tokenizer::{Tokenizer, iter::Iter};
