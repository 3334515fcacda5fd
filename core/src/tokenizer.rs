//! The immutable value that starts iterations over an expression's fragments.

use crate::{Expression, DelimiterClassifier, DefaultClassifier};


pub mod iter;
use iter::Iter;


/// Splits one [`Expression`](../struct.Expression.html) into its top-level
/// [`Fragment`](../struct.Fragment.html)s.
///
/// This holds only the expression view and the classifier, and it is never
/// mutated, so it may be copied, shared, and iterated any number of times,
/// including by multiple iterations at once.  No splitting happens until an
/// [`Iter`](iter/struct.Iter.html) is advanced.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Tokenizer<'s, C = DefaultClassifier> {
    expr: Expression<'s>,
    classifier: C,
}

impl<'s> Tokenizer<'s> {
    /// Make one for the entirety of `src` that uses the build-expression
    /// delimiters of [`DefaultClassifier`](../struct.DefaultClassifier.html).
    #[inline]
    pub fn new(src: &'s str) -> Self {
        Self::from_expression(Expression::new(src))
    }

    /// Make one for an already-established view that uses the
    /// build-expression delimiters.
    #[inline]
    pub fn from_expression(expr: Expression<'s>) -> Self {
        Self::with_classifier(expr, DefaultClassifier)
    }
}

impl<'s, C> Tokenizer<'s, C>
    where C: DelimiterClassifier + Clone,
{
    /// Make one that uses the given classifier to decide the delimiters.
    #[inline]
    pub fn with_classifier<E>(expr: E, classifier: C) -> Self
        where E: Into<Expression<'s>>,
    {
        Self {
            expr: expr.into(),
            classifier,
        }
    }

    /// The expression we split.
    #[inline]
    pub fn expression(&self) -> Expression<'s> {
        self.expr
    }

    /// The classifier we use.
    #[inline]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Start a new iteration from the beginning of our expression.  It is
    /// independent of any other iterations.
    #[inline]
    pub fn iter(&self) -> Iter<'s, C> {
        Iter::new(self.expr, self.classifier.clone())
    }
}

impl<'s> From<&'s str> for Tokenizer<'s> {
    #[inline]
    fn from(src: &'s str) -> Self {
        Self::new(src)
    }
}

impl<'s, C> IntoIterator for Tokenizer<'s, C>
    where C: DelimiterClassifier + Clone,
{
    type Item = crate::Fragment<'s>;
    type IntoIter = Iter<'s, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.expr, self.classifier)
    }
}

impl<'s, C> IntoIterator for &Tokenizer<'s, C>
    where C: DelimiterClassifier + Clone,
{
    type Item = crate::Fragment<'s>;
    type IntoIter = Iter<'s, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
