//! Splitting inputs that are single in-memory strings, all at once.

use log::trace;

use crate::{Tokenizer, DelimiterClassifier, FragmentVec};


#[doc(no_inline)]
pub use crate::DefaultClassifier as Classifier;


/// Make a new `Tokenizer` for all of `src`, that uses the build-expression
/// delimiters.
///
/// You may iterate the returned [`Tokenizer`] however you like, lazily.
///
/// [`Tokenizer`]: ../../../semitok_core/tokenizer/struct.Tokenizer.html
#[inline]
pub fn tokenizer(src: &str) -> Tokenizer<'_, Classifier> {
    Tokenizer::new(src)
}

/// Split the given string completely, using the build-expression delimiters,
/// and return the fragments' texts in a `Vec`.  The elements borrow from
/// `src`.
pub fn split_str(src: &str) -> Vec<&str> {
    split_str_with(src, Classifier)
}

/// Like [`split_str`](fn.split_str.html) but uses the given classifier to
/// decide the delimiters.
pub fn split_str_with<C>(src: &str, classifier: C) -> Vec<&str>
    where C: DelimiterClassifier + Clone,
{
    let v: Vec<&str> = Tokenizer::with_classifier(src, classifier)
        .into_iter()
        .map(|f| f.as_str())
        .collect();
    trace!("split {} bytes into {} fragments", src.len(), v.len());
    v
}

/// Split the given string completely, using the build-expression delimiters,
/// and return the [`Fragment`]s, which also have their positions.
///
/// [`Fragment`]: ../../../semitok_core/struct.Fragment.html
pub fn fragments(src: &str) -> FragmentVec<'_> {
    fragments_with(src, Classifier)
}

/// Like [`fragments`](fn.fragments.html) but uses the given classifier to
/// decide the delimiters.
pub fn fragments_with<C>(src: &str, classifier: C) -> FragmentVec<'_>
    where C: DelimiterClassifier + Clone,
{
    let fv: FragmentVec<'_> = Tokenizer::with_classifier(src, classifier).into_iter().collect();
    trace!("split {} bytes into {} fragments", src.len(), fv.len());
    fv
}

/// Split the given string completely, using the build-expression delimiters,
/// and return copies of the fragments' texts, for when they must outlive
/// `src`.
pub fn split_owned(src: &str) -> Vec<String> {
    tokenizer(src).into_iter().map(|f| f.as_str().to_owned()).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basics() {
        assert_eq!(split_str("a;b;c"), ["a", "b", "c"]);
        assert!(split_str("").is_empty());
        assert_eq!(fragments(" a;b").iter().map(|f| f.start()).collect::<Vec<_>>(),
                   [1, 3]);
        assert_eq!(split_owned("@(I->'%(x);');z"),
                   [String::from("@(I->'%(x);')"), String::from("z")]);
    }

    #[test]
    fn owned_outlives_source() {
        let owned = {
            let src = String::from("x ; y");
            split_owned(&src)
        };
        assert_eq!(owned, ["x", "y"]);
    }
}
