//! Utilities for checking fragments and for driving tests.

use semitok_core::{Fragment, Tokenizer};


/// Inputs that exercise the nesting, quoting, trimming, and leniency cases.
/// Used by the property checks, which must hold for every one.
pub const TRICKY_INPUTS: &[&str] = &[
    "",
    " ",
    ";",
    ";;; ;",
    "a",
    "a;b;c",
    "  a ; ; b  ",
    ";a;",
    "@(Foo->'x;y');bar",
    "@(Foo, 'a;b');@(Bar, 'c;d')",
    "@(F->'a;b', 'c;d');e",
    "$(x.Replace(';', ','));y",
    "@(Compile->'%(Filename).obj;%(Extension)', ' ; ');$(Out);;@(None)",
    "(a;(b;c);d);e",
    "a;(b;c",
    "a);b",
    ")));x",
    "'a;b';c",
    "a'b;c",
    "'';a",
    "a';'b;c",
    "@(I, ')');z",
    "a;(b;c);d;(e",
    "λ;μ ; ν",
    "\u{A0}a\u{A0};b",
    "\ta\n;\r\nb\n",
    "x(;)y;z",
    "((a);b",
];


/// Install `env_logger` for tests, ignoring that it might already be.  Set
/// `RUST_LOG=trace` to see the scanning.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The texts and start offsets, for comparing with expectations.
pub fn pairs<'s>(fragments: &[Fragment<'s>]) -> Vec<(&'s str, usize)> {
    fragments.iter().map(|f| (f.as_str(), f.start())).collect()
}

/// Assert the invariants that every splitting of `input` must have: each
/// fragment is non-empty, is exactly the slice of `input` at its claimed
/// position, has no surrounding whitespace, and comes after the previous one
/// with at least a separator between them.
pub fn check_spans(input: &str, fragments: &[Fragment<'_>]) {
    check_spans_ws(input, fragments, char::is_whitespace)
}

/// Like [`check_spans`](fn.check_spans.html) but with a custom notion of
/// whitespace.
pub fn check_spans_ws<W>(input: &str, fragments: &[Fragment<'_>], is_ws: W)
    where W: Fn(char) -> bool + Copy,
{
    let mut prev_end = None;
    for f in fragments {
        assert!(!f.is_empty(), "empty fragment of {:?}", input);
        assert_eq!(Some(f.as_str()), input.get(f.start() .. f.end()),
                   "fragment not at its position in {:?}", input);
        assert_eq!(f.as_str().trim_matches(is_ws), f.as_str(),
                   "untrimmed fragment of {:?}", input);
        if let Some(prev_end) = prev_end {
            assert!(prev_end < f.start(), "misordered fragments of {:?}", input);
        }
        prev_end = Some(f.end());
    }
}

/// Split with the default classifier, as plain texts.
pub fn texts(input: &str) -> Vec<&str> {
    Tokenizer::new(input).iter().map(|f| f.as_str()).collect()
}
