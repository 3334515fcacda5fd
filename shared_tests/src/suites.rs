//! Suites of tests applied across multiple crates


use log::debug;

use semitok_core::Tokenizer;

use super::{Splitter, CustomClassifier, utils::*};


/// Basic test suite that checks splitting with the build-expression
/// delimiters: `;` separates, `(` `)` nest, `'` quotes.
///
/// Expectations are written as `text @ start` where `start` is the byte offset
/// in the input.
pub fn test_suite0<S>(s: &mut S)
    where S: Splitter,
{
    init_logging();

    macro_rules! test {
        ($input:expr => [$($val:literal @ $start:literal),*]) => {{
            let input: &'static str = $input;
            debug!("suite0 input {:?}", input);
            let actual = s.split(input);
            check_spans(input, &actual);
            let expected: Vec<(&str, usize)> = vec![$(($val, $start)),*];
            assert_eq!(pairs(&actual), expected, "input: {:?}", input);
        }};
    }

    // Basics
    test!("" => []);
    test!(" " => []);
    test!(";" => []);
    test!(";;;" => []);
    test!(" ; \t ;\n" => []);
    test!("a" => ["a" @ 0]);
    test!(" a " => ["a" @ 1]);
    test!("xyz" => ["xyz" @ 0]);
    test!("a;b;c" => ["a" @ 0, "b" @ 2, "c" @ 4]);
    test!("  a ; ; b  " => ["a" @ 2, "b" @ 8]);
    test!(";a;" => ["a" @ 1]);
    test!(";;a;;b;;" => ["a" @ 2, "b" @ 5]);
    test!("a b ; c  d" => ["a b" @ 0, "c  d" @ 6]);
    test!("\ta\n;\r\nb" => ["a" @ 1, "b" @ 6]);

    // Item transforms and separators
    test!("@(Foo->'x;y');bar" => ["@(Foo->'x;y')" @ 0, "bar" @ 14]);
    test!("@(Foo, 'a;b');@(Bar, 'c;d')" => ["@(Foo, 'a;b')" @ 0, "@(Bar, 'c;d')" @ 14]);
    test!("@(F->'a;b', 'c;d');e" => ["@(F->'a;b', 'c;d')" @ 0, "e" @ 19]);
    test!(" @(X) ; " => ["@(X)" @ 1]);
    test!("$(x.Replace(';', ','));y" => ["$(x.Replace(';', ','))" @ 0, "y" @ 23]);

    // Nesting
    test!("(a;(b;c);d);e" => ["(a;(b;c);d)" @ 0, "e" @ 12]);
    test!("x(;)y;z" => ["x(;)y" @ 0, "z" @ 6]);
    test!("a;(b;c);d;(e" => ["a" @ 0, "(b;c)" @ 2, "d" @ 8, "(e" @ 10]);

    // Quotes
    test!("'a;b';c" => ["'a;b'" @ 0, "c" @ 6]);
    test!("'(';x" => ["'('" @ 0, "x" @ 4]);
    test!("@(I, ')');z" => ["@(I, ')')" @ 0, "z" @ 10]);
    test!("'';a" => ["''" @ 0, "a" @ 3]);
    test!("a';'b;c" => ["a';'b" @ 0, "c" @ 6]);

    // Lenient
    test!("a;(b;c" => ["a" @ 0, "(b;c" @ 2]);
    test!("(;" => ["(;" @ 0]);
    test!("((a);b" => ["((a);b" @ 0]);
    test!("a);b" => ["a)" @ 0, "b" @ 3]);
    test!(")));x" => [")))" @ 0, "x" @ 4]);
    test!("a'b;c" => ["a'b;c" @ 0]);
    test!("a;'b;c" => ["a" @ 0, "'b;c" @ 2]);

    // Non-ASCII
    test!("λ;μ ; ν" => ["λ" @ 0, "μ" @ 3, "ν" @ 8]);
    test!("\u{A0}a\u{A0};b" => ["a" @ 2, "b" @ 6]);
}


/// Test suite that checks splitting with custom delimiters.
pub fn test_suite1<S>(s: &mut S)
    where S: Splitter,
{
    init_logging();

    macro_rules! test {
        ($input:expr =>($c:expr) [$($val:literal @ $start:literal),*]) => {{
            let input: &'static str = $input;
            let c: &CustomClassifier = $c;
            debug!("suite1 input {:?}", input);
            let actual = s.split_with(input, c);
            check_spans_ws(input, &actual, |ch| c.whitespace.as_ref()
                                              .map_or(ch.is_whitespace(),
                                                      |ws| ws.contains(&ch)));
            let expected: Vec<(&str, usize)> = vec![$(($val, $start)),*];
            assert_eq!(pairs(&actual), expected, "input: {:?}", input);
        }};
    }

    {
        let c = &CustomClassifier {
            separator: vec![','],
            nest_start: vec!['['],
            nest_end: vec![']'],
            quote: vec!['"'],
            whitespace: None,
        };
        test!("" =>(c) []);
        test!("a,b" =>(c) ["a" @ 0, "b" @ 2]);
        test!("a;b" =>(c) ["a;b" @ 0]);
        test!("[a,b],c" =>(c) ["[a,b]" @ 0, "c" @ 6]);
        test!("\"x,y\",z" =>(c) ["\"x,y\"" @ 0, "z" @ 6]);
        test!("(a,b)" =>(c) ["(a" @ 0, "b)" @ 3]);
        test!("'a,b'" =>(c) ["'a" @ 0, "b'" @ 3]);
    }
    {
        let c = &CustomClassifier {
            separator: vec![';', '|'],
            nest_start: vec!['⟪', '{'],
            nest_end: vec!['⟫', '}'],
            quote: vec!['`'],
            whitespace: Some(vec!['-']),
        };
        test!("a|b;c" =>(c) ["a" @ 0, "b" @ 2, "c" @ 4]);
        test!("-a-|--b" =>(c) ["a" @ 1, "b" @ 6]);
        test!(" a |b" =>(c) [" a " @ 0, "b" @ 4]);
        test!("⟪a;b⟫;c" =>(c) ["⟪a;b⟫" @ 0, "c" @ 10]);
        test!("{a|b⟫|c" =>(c) ["{a|b⟫" @ 0, "c" @ 8]);
        test!("`a;b`;c" =>(c) ["`a;b`" @ 0, "c" @ 6]);
        test!("--;--" =>(c) []);
    }
    {
        // A character claimed for two roles acts in the earlier-asked one.
        let c = &CustomClassifier {
            separator: vec![';', '\''],
            nest_start: vec!['('],
            nest_end: vec![')'],
            quote: vec!['\''],
            whitespace: None,
        };
        test!("'a;b';c" =>(c) ["'a;b'" @ 0, "c" @ 6]);
    }
}


/// Checks that hold for every input of
/// [`TRICKY_INPUTS`](../utils/constant.TRICKY_INPUTS.html) with the
/// build-expression delimiters.
pub fn test_properties<S>(s: &mut S)
    where S: Splitter,
{
    init_logging();

    for &input in TRICKY_INPUTS {
        let fragments = s.split(input);
        check_spans(input, &fragments);

        // Same as every other way of splitting.
        assert_eq!(fragments.iter().map(|f| f.as_str()).collect::<Vec<_>>(),
                   texts(input), "input: {:?}", input);

        // Each fragment is whole: it contains no top-level separator.
        for f in &fragments {
            assert_eq!(texts(f.as_str()), [f.as_str()], "input: {:?}", input);
        }

        // Rejoining splits the same.  Every fragment but the last ended at top
        // level, so the joined separators are still separators.
        let joined = fragments.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(";");
        assert_eq!(Tokenizer::new(&joined).iter().map(|f| f.as_str()).collect::<Vec<_>>(),
                   texts(input), "input: {:?}", input);
    }
}
