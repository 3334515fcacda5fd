use crate::classifier::DelimiterClassifier;


/// A [`DelimiterClassifier`](../trait.DelimiterClassifier.html) for
/// build-engine expressions: `;` separates, `(` and `)` nest, `'` quotes, and
/// whitespace is per the Unicode whitespace property (the same as
/// `str::trim`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct DefaultClassifier;

impl DelimiterClassifier for DefaultClassifier {
    #[inline]
    fn is_separator(&self, c: char) -> bool {
        ';' == c
    }

    #[inline]
    fn is_nest_start(&self, c: char) -> bool {
        '(' == c
    }

    #[inline]
    fn is_nest_end(&self, c: char) -> bool {
        ')' == c
    }

    #[inline]
    fn is_quote(&self, c: char) -> bool {
        '\'' == c
    }

    #[inline]
    fn is_whitespace(&self, c: char) -> bool {
        c.is_whitespace()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles() {
        let c = DefaultClassifier;
        assert!(c.is_separator(';') && !c.is_separator(','));
        assert!(c.is_nest_start('(') && !c.is_nest_start('{'));
        assert!(c.is_nest_end(')') && !c.is_nest_end('}'));
        assert!(c.is_quote('\'') && !c.is_quote('"'));
        assert!(c.is_whitespace(' ') && c.is_whitespace('\t')
                && c.is_whitespace('\n') && c.is_whitespace('\u{A0}'));
        assert!(!c.is_whitespace('a'));
    }

    #[test]
    fn by_reference() {
        fn separates<C: DelimiterClassifier>(c: C) -> bool {
            c.is_separator(';')
        }
        assert!(separates(DefaultClassifier));
        assert!(separates(&DefaultClassifier));
        assert!(separates(&&DefaultClassifier));
    }
}
