//! Determining which characters have special meaning to the splitting.


/// Implementations provided for ready use.
pub mod premade {
    mod default_classifier;
    pub use default_classifier::DefaultClassifier;
}


/// Classifies the characters that affect how an expression is split.  The
/// scanning of [`Iter`](../struct.Iter.html) is generic over this so that
/// different conventions can be used with the same algorithm.
///
/// Each predicate is asked in the order: quote, nest start, nest end,
/// separator.  So if an implementation claims a character for more than one
/// role, the earlier role wins.
pub trait DelimiterClassifier {
    /// Predicate that determines the character(s) that delimit fragments when
    /// at top level.
    fn is_separator(&self, c: char) -> bool;

    /// Predicate that determines the character(s) that open a nested form,
    /// inside of which separators are ordinary content.
    fn is_nest_start(&self, c: char) -> bool;

    /// Predicate that determines the character(s) that close a nested form.
    fn is_nest_end(&self, c: char) -> bool;

    /// Predicate that determines the character(s) that both open and close a
    /// quoted literal, inside of which all of the other delimiters are ordinary
    /// content.
    fn is_quote(&self, c: char) -> bool;

    /// Predicate that determines the character(s) trimmed from both ends of
    /// each fragment.
    fn is_whitespace(&self, c: char) -> bool;
}

/// Allows borrowing a classifier instead of copying it into each `Iter`.
impl<C> DelimiterClassifier for &C
    where C: DelimiterClassifier + ?Sized,
{
    #[inline]
    fn is_separator(&self, c: char) -> bool {
        (**self).is_separator(c)
    }

    #[inline]
    fn is_nest_start(&self, c: char) -> bool {
        (**self).is_nest_start(c)
    }

    #[inline]
    fn is_nest_end(&self, c: char) -> bool {
        (**self).is_nest_end(c)
    }

    #[inline]
    fn is_quote(&self, c: char) -> bool {
        (**self).is_quote(c)
    }

    #[inline]
    fn is_whitespace(&self, c: char) -> bool {
        (**self).is_whitespace(c)
    }
}
