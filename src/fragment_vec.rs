//! A heap-allocated, collected sequence of fragments.

use std::ops::Deref;

use crate::Fragment;


/// The fragments of an expression, collected.  Derefs to a slice of them.
///
/// Since each `Fragment` borrows from the source string, this does too, and
/// collecting costs one allocation for the `Vec` but still no copying of text.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct FragmentVec<'s>(Vec<Fragment<'s>>);

impl<'s> FragmentVec<'s> {
    /// Make an empty one.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fragments' texts, in order.
    pub fn as_strs(&self) -> Vec<&'s str> {
        self.0.iter().map(Fragment::as_str).collect()
    }

    /// Give up our `Vec`.
    #[inline]
    pub fn into_inner(self) -> Vec<Fragment<'s>> {
        self.0
    }
}

impl<'s> Deref for FragmentVec<'s> {
    type Target = [Fragment<'s>];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'s> From<Vec<Fragment<'s>>> for FragmentVec<'s> {
    #[inline]
    fn from(v: Vec<Fragment<'s>>) -> Self {
        Self(v)
    }
}

impl<'s> FromIterator<Fragment<'s>> for FragmentVec<'s> {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = Fragment<'s>>,
    {
        Self(iter.into_iter().collect())
    }
}

impl<'s> IntoIterator for FragmentVec<'s> {
    type Item = Fragment<'s>;
    type IntoIter = std::vec::IntoIter<Fragment<'s>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'v, 's> IntoIterator for &'v FragmentVec<'s> {
    type Item = &'v Fragment<'s>;
    type IntoIter = std::slice::Iter<'v, Fragment<'s>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
