//! Used by the tests of both the [core](../semitok_core/index.html) and the
//! [full](../semitok/index.html) crates.  It provides test suites that can be
//! run against any way of splitting, via the [`Splitter`](trait.Splitter.html)
//! trait, so that the lazy iterator, its reset, and the eager helpers are all
//! held to the same expectations.

use semitok_core::{DelimiterClassifier, Fragment};


pub mod suites;
pub mod utils;


/// A way of splitting an entire input into all of its fragments.  Each crate's
/// tests implement this for each of their ways.
pub trait Splitter {
    /// Split with the build-expression delimiters.
    fn split(&mut self, input: &'static str) -> Vec<Fragment<'static>>;

    /// Split with the given custom delimiters.
    fn split_with(&mut self, input: &'static str, classifier: &CustomClassifier)
                  -> Vec<Fragment<'static>>;
}


/// A `DelimiterClassifier` whose characters for each role are listed at run
/// time, so the suites can vary them.
#[derive(Clone, Debug, Default)]
pub struct CustomClassifier {
    /// Characters that separate fragments.
    pub separator: Vec<char>,
    /// Characters that open a nest.
    pub nest_start: Vec<char>,
    /// Characters that close a nest.
    pub nest_end: Vec<char>,
    /// Characters that open and close a quoted literal.
    pub quote: Vec<char>,
    /// Characters trimmed from the ends of fragments.  `None` means to use the
    /// Unicode whitespace property.
    pub whitespace: Option<Vec<char>>,
}

impl DelimiterClassifier for CustomClassifier {
    fn is_separator(&self, c: char) -> bool {
        self.separator.contains(&c)
    }

    fn is_nest_start(&self, c: char) -> bool {
        self.nest_start.contains(&c)
    }

    fn is_nest_end(&self, c: char) -> bool {
        self.nest_end.contains(&c)
    }

    fn is_quote(&self, c: char) -> bool {
        self.quote.contains(&c)
    }

    fn is_whitespace(&self, c: char) -> bool {
        match &self.whitespace {
            Some(ws) => ws.contains(&c),
            None => c.is_whitespace(),
        }
    }
}
