//! The stateful scanning of an expression for its fragments.

use core::iter::FusedIterator;

use log::{debug, trace};

use crate::{Expression, Fragment, DelimiterClassifier};


/// An `Iterator` of the top-level [`Fragment`](../../struct.Fragment.html)s of
/// an expression, in order.
///
/// Each advance scans forward from our cursor, tracking the nesting depth and
/// whether a quoted literal is open, until a separator is found at depth 0
/// outside of quotes or until the end of the expression.  The text up to there
/// is trimmed, and if that leaves nothing it is discarded and the scan
/// continues.  So consecutive separators, and separators next to the ends, never
/// produce empty fragments.
///
/// Nothing is reported as an error.  An unmatched nest start or an unclosed
/// quote just means that the rest of the expression is a single fragment.  An
/// unmatched nest end at depth 0 is ordinary content.
///
/// Besides the `Iterator` interface, the [`move_next`](#method.move_next) and
/// [`current`](#method.current) methods allow advancing and reading
/// separately, and [`reset`](#method.reset) restarts from the beginning.
#[derive(Clone, Debug)]
pub struct Iter<'s, C> {
    expr: Expression<'s>,
    classifier: C,
    /// Byte offset into the source of where the next scan starts.
    index: usize,
    current: Fragment<'s>,
}

impl<'s, C> Iter<'s, C>
    where C: DelimiterClassifier,
{
    /// Make a new one, positioned at the beginning of `expr`.
    pub fn new(expr: Expression<'s>, classifier: C) -> Self {
        Self {
            expr,
            classifier,
            index: expr.start(),
            current: Fragment::default(),
        }
    }

    /// Advance to the next fragment.  Returns `true` if there was one, which
    /// is then available from [`current`](#method.current), or `false` if the
    /// expression has no more.
    pub fn move_next(&mut self) -> bool {
        let src = self.expr.src();
        let end = self.expr.end();
        while self.index < end {
            let start = self.index;
            let rest = &src[start .. end];
            let Scanned { len, consumed } = scan(&self.classifier, rest);
            self.index += consumed;
            if let Some(fragment) = trim(&self.classifier, &rest[.. len], start) {
                trace!("fragment at {}+{}", fragment.start(), fragment.len());
                self.current = fragment;
                return true
            }
            trace!("discarded blank candidate at {}+{}", start, len);
        }
        trace!("exhausted at {}", self.index);
        self.current = Fragment::default();
        false
    }

    /// The fragment found by the last call of `move_next` that returned
    /// `true`.  Before any, or after one returned `false`, or after a reset,
    /// this is the empty `Fragment::default()`.
    #[inline]
    pub fn current(&self) -> Fragment<'s> {
        self.current
    }

    /// Restart from the beginning of the same expression.  Iterating again
    /// yields the same sequence.
    pub fn reset(&mut self) {
        trace!("reset to {}", self.expr.start());
        self.index = self.expr.start();
        self.current = Fragment::default();
    }

    /// Byte offset, into the original source, of where the next scan will
    /// start.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Predicate for if the cursor has reached the end of the expression, in
    /// which case there are no more fragments.  (When `false`, there still
    /// might not be any more, if all that remains is blank.)
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.expr.end()
    }

    /// The expression being scanned.
    #[inline]
    pub fn expression(&self) -> Expression<'s> {
        self.expr
    }
}


/// Result of scanning for the next top-level separator.
struct Scanned {
    /// Length of the candidate fragment, before trimming.
    len: usize,
    /// Length of the candidate plus its terminating separator, if any.
    consumed: usize,
}

fn scan<C>(classifier: &C, rest: &str) -> Scanned
    where C: DelimiterClassifier,
{
    let mut depth: usize = 0;
    let mut quoted = false;
    for (i, c) in rest.char_indices() {
        match c {
            c if classifier.is_quote(c) => quoted = !quoted,
            _ if quoted => {}
            c if classifier.is_nest_start(c) => depth += 1,
            c if classifier.is_nest_end(c) => depth = depth.saturating_sub(1),
            c if depth == 0 && classifier.is_separator(c) =>
                return Scanned { len: i, consumed: i + c.len_utf8() },
            _ => {}
        }
    }
    if depth != 0 || quoted {
        debug!("reached end with depth {} and quote {}, leaving remainder unsplit",
               depth, if quoted { "open" } else { "closed" });
    }
    Scanned { len: rest.len(), consumed: rest.len() }
}

/// `start` is the offset of `candidate` in the source.
fn trim<'s, C>(classifier: &C, candidate: &'s str, start: usize) -> Option<Fragment<'s>>
    where C: DelimiterClassifier,
{
    let is_ws = |c: char| classifier.is_whitespace(c);
    let after_lead = candidate.trim_start_matches(is_ws);
    let lead = candidate.len() - after_lead.len();
    let val = after_lead.trim_end_matches(is_ws);
    if val.is_empty() {
        None
    } else {
        Some(Fragment::new(val, start + lead))
    }
}


impl<'s, C> Iterator for Iter<'s, C>
    where C: DelimiterClassifier,
{
    type Item = Fragment<'s>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            Some(self.current)
        } else {
            None
        }
    }

    /// Every fragment but the last needs at least one non-blank character and a
    /// separator.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.expr.end().saturating_sub(self.index);
        (0, Some(remaining.div_ceil(2)))
    }
}

/// Once exhausted, the cursor stays at the end.
impl<C> FusedIterator for Iter<'_, C>
    where C: DelimiterClassifier,
{}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tokenizer, DefaultClassifier};

    fn frag(val: &str, start: usize) -> Fragment<'_> {
        Fragment::new(val, start)
    }

    #[test]
    fn move_next_and_current() {
        let mut it = Tokenizer::new(" a ;b").iter();
        assert_eq!(it.current(), Fragment::default());
        assert!(it.move_next());
        assert_eq!(it.current(), frag("a", 1));
        assert_eq!(it.current(), frag("a", 1));
        assert_eq!(it.position(), 4);
        assert!(!it.is_exhausted());
        assert!(it.move_next());
        assert_eq!(it.current(), frag("b", 4));
        assert!(it.is_exhausted());
        assert!(!it.move_next());
        assert_eq!(it.current(), Fragment::default());
        assert!(!it.move_next());
        assert_eq!(it.current(), Fragment::default());
    }

    #[test]
    fn reset() {
        let mut it = Tokenizer::new("x;@(I, ';');y").iter();
        let first: [Fragment<'_>; 3] = [frag("x", 0), frag("@(I, ';')", 2), frag("y", 12)];
        assert!(it.by_ref().eq(first));
        assert!(it.is_exhausted());
        it.reset();
        assert_eq!(it.current(), Fragment::default());
        assert_eq!(it.position(), 0);
        assert!(it.by_ref().eq(first));
        // Partway
        it.reset();
        assert_eq!(it.next(), Some(frag("x", 0)));
        it.reset();
        assert!(it.eq(first));
    }

    #[test]
    fn reset_of_view() {
        let expr = Expression::from_view("0;1;2;3", 2, 3).unwrap();
        let mut it = Iter::new(expr, DefaultClassifier);
        assert_eq!(it.position(), 2);
        assert_eq!(it.next(), Some(frag("1", 2)));
        it.reset();
        assert_eq!(it.position(), 2);
        assert!(it.eq([frag("1", 2), frag("2", 4)]));
    }

    #[test]
    fn independent_clones() {
        let mut a = Tokenizer::new("p;q;r").iter();
        assert_eq!(a.next(), Some(frag("p", 0)));
        let mut b = a.clone();
        assert_eq!(a.next(), Some(frag("q", 2)));
        assert_eq!(a.next(), Some(frag("r", 4)));
        assert_eq!(a.next(), None);
        assert_eq!(b.next(), Some(frag("q", 2)));
        assert_eq!(b.current(), frag("q", 2));
    }

    #[test]
    fn blank_candidates_are_skipped() {
        assert_eq!(Tokenizer::new(";;;").iter().next(), None);
        assert_eq!(Tokenizer::new(" ; \t;\n ").iter().next(), None);
        assert!(Tokenizer::new(";a;;").iter().eq([frag("a", 1)]));
    }

    #[test]
    fn scanning_state() {
        let s = scan(&DefaultClassifier, "a(;)';'b;c");
        assert_eq!((s.len, s.consumed), (8, 9));
        let s = scan(&DefaultClassifier, "(a;b");
        assert_eq!((s.len, s.consumed), (4, 4));
        let s = scan(&DefaultClassifier, "'a;b");
        assert_eq!((s.len, s.consumed), (4, 4));
        // Quoted parens don't nest.
        let s = scan(&DefaultClassifier, "@(a, ')');b");
        assert_eq!((s.len, s.consumed), (9, 10));
        // Unmatched close at top level is plain content.
        let s = scan(&DefaultClassifier, "a);b");
        assert_eq!((s.len, s.consumed), (2, 3));
    }

    #[test]
    fn trimming() {
        assert_eq!(trim(&DefaultClassifier, "  ab c \t", 10), Some(frag("ab c", 12)));
        assert_eq!(trim(&DefaultClassifier, "x", 0), Some(frag("x", 0)));
        assert_eq!(trim(&DefaultClassifier, " \n ", 3), None);
        assert_eq!(trim(&DefaultClassifier, "", 3), None);
    }

    #[test]
    fn size_hint_bounds() {
        let it = Tokenizer::new("a;b;c").iter();
        assert_eq!(it.size_hint(), (0, Some(3)));
        assert_eq!(it.count(), 3);
        let it = Tokenizer::new("").iter();
        assert_eq!(it.size_hint(), (0, Some(0)));
        let mut it = Tokenizer::new("a").iter();
        assert_eq!(it.size_hint(), (0, Some(1)));
        let _ = it.next();
        assert_eq!(it.size_hint(), (0, Some(0)));
    }
}
