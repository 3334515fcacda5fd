use semitok_core::{Tokenizer, Fragment, Iter, DelimiterClassifier};

use semitok_shared_tests::{Splitter, CustomClassifier, suites::*};


fn drain<C>(mut it: Iter<'static, C>) -> Vec<Fragment<'static>>
    where C: DelimiterClassifier,
{
    let mut v = vec![];
    while it.move_next() {
        assert!(!it.current().is_empty());
        v.push(it.current());
    }
    assert_eq!(it.current(), Fragment::default());
    assert!(it.is_exhausted());
    v
}

/// Advances with `move_next` and reads with `current`.
struct MoveNext;

impl Splitter for MoveNext {
    fn split(&mut self, input: &'static str) -> Vec<Fragment<'static>> {
        drain(Tokenizer::new(input).iter())
    }

    fn split_with(&mut self, input: &'static str, classifier: &CustomClassifier)
                  -> Vec<Fragment<'static>>
    {
        drain(Tokenizer::with_classifier(input, classifier).iter())
    }
}

/// Uses the `Iterator` interface.
struct Collect;

impl Splitter for Collect {
    fn split(&mut self, input: &'static str) -> Vec<Fragment<'static>> {
        Tokenizer::new(input).into_iter().collect()
    }

    fn split_with(&mut self, input: &'static str, classifier: &CustomClassifier)
                  -> Vec<Fragment<'static>>
    {
        Tokenizer::with_classifier(input, classifier.clone()).into_iter().collect()
    }
}

/// Takes some, resets, then collects everything, twice.
struct Resetting;

impl Resetting {
    fn run<C>(mut it: Iter<'static, C>) -> Vec<Fragment<'static>>
        where C: DelimiterClassifier,
    {
        let partial: Vec<_> = it.by_ref().take(2).collect();
        it.reset();
        let first: Vec<_> = it.by_ref().collect();
        it.reset();
        let second: Vec<_> = it.collect();
        assert_eq!(first, second);
        assert!(first.starts_with(&partial));
        first
    }
}

impl Splitter for Resetting {
    fn split(&mut self, input: &'static str) -> Vec<Fragment<'static>> {
        Self::run(Tokenizer::new(input).iter())
    }

    fn split_with(&mut self, input: &'static str, classifier: &CustomClassifier)
                  -> Vec<Fragment<'static>>
    {
        Self::run(Tokenizer::with_classifier(input, classifier).iter())
    }
}

/// Interleaves two iterators of the same tokenizer.
struct Interleaved;

impl Interleaved {
    fn run<C>(t: &Tokenizer<'static, C>) -> Vec<Fragment<'static>>
        where C: DelimiterClassifier + Clone,
    {
        let (mut a, mut b) = (t.iter(), t.iter());
        let mut v = vec![];
        loop {
            match (a.next(), b.next()) {
                (Some(x), Some(y)) => {
                    assert_eq!(x, y);
                    v.push(x);
                }
                (None, None) => break v,
                mismatch => panic!("iterators diverged: {:?}", mismatch),
            }
        }
    }
}

impl Splitter for Interleaved {
    fn split(&mut self, input: &'static str) -> Vec<Fragment<'static>> {
        Self::run(&Tokenizer::new(input))
    }

    fn split_with(&mut self, input: &'static str, classifier: &CustomClassifier)
                  -> Vec<Fragment<'static>>
    {
        Self::run(&Tokenizer::with_classifier(input, classifier))
    }
}


#[test]
fn suite0_move_next() {
    test_suite0(&mut MoveNext);
}

#[test]
fn suite0_collect() {
    test_suite0(&mut Collect);
}

#[test]
fn suite0_resetting() {
    test_suite0(&mut Resetting);
}

#[test]
fn suite0_interleaved() {
    test_suite0(&mut Interleaved);
}

#[test]
fn suite1_move_next() {
    test_suite1(&mut MoveNext);
}

#[test]
fn suite1_collect() {
    test_suite1(&mut Collect);
}

#[test]
fn suite1_resetting() {
    test_suite1(&mut Resetting);
}

#[test]
fn suite1_interleaved() {
    test_suite1(&mut Interleaved);
}

#[test]
fn properties() {
    test_properties(&mut MoveNext);
    test_properties(&mut Resetting);
    test_properties(&mut Interleaved);
}
