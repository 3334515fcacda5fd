#![allow(missing_docs, clippy::print_stdout)]

use semitok::{
    Tokenizer, Expression, DelimiterClassifier,
    common::inmem::{split_str, fragments},
};


/// Split some typical item expressions and print the fragments and where they
/// are.
fn build_expressions() {
    let inputs = [
        "a.cs;b.cs;;c.cs",
        "@(Compile->'%(Filename).obj;%(Filename).pdb');@(Resource)",
        "@(Reference, ';');$(ExtraRefs); lib/*.dll ",
        "$(Path.Replace(';', ','));@(Unclosed->'x;y",
    ];
    for input in inputs {
        println!("\n{:?}", input);
        for f in fragments(input).iter() {
            println!("  {:>3}..{:<3} {}", f.start(), f.end(), f);
        }
    }
}

/// Splitting only part of a larger buffer, and stopping early.
fn views_and_early_exit() {
    let buffer = "<Items Include=\"x;y;@(Z->'%(A);%(B)')\"/>";
    let start = buffer.find('"').map_or(0, |i| i + 1);
    let len = buffer[start ..].find('"').unwrap_or(0);
    match Expression::from_view(buffer, start, len) {
        Ok(expr) => {
            let first = Tokenizer::from_expression(expr).into_iter().next();
            println!("\nfirst of {:?}: {:?}", expr.as_str(), first.map(|f| f.as_str()));
            let all: Vec<_> = Tokenizer::from_expression(expr).into_iter()
                                                              .map(|f| (f.start(), f.as_str()))
                                                              .collect();
            println!("all, with offsets into the buffer: {:?}", all);
        }
        Err(e) => println!("\nbad view: {}", e),
    }
    if let Err(e) = Expression::from_view(buffer, buffer.len(), 1) {
        println!("bad view: {}", e);
    }
}

/// Splitting a comma-separated list whose elements may be bracketed or
/// double-quoted.
fn custom_delimiters() {
    #[derive(Clone, Copy, Debug)]
    struct Csv;

    impl DelimiterClassifier for Csv {
        fn is_separator(&self, c: char) -> bool { ',' == c }
        fn is_nest_start(&self, c: char) -> bool { '[' == c }
        fn is_nest_end(&self, c: char) -> bool { ']' == c }
        fn is_quote(&self, c: char) -> bool { '"' == c }
        fn is_whitespace(&self, c: char) -> bool { c.is_whitespace() }
    }

    let input = r#"one, [two, three], "four, five",, six"#;
    let t = Tokenizer::with_classifier(input, Csv);
    println!("\n{:?} => {:?}", input, t.iter().map(|f| f.as_str()).collect::<Vec<_>>());
    println!("default rules instead => {:?}", split_str(input));
}


fn main() {
    env_logger::init();
    build_expressions();
    views_and_early_exit();
    custom_delimiters();
}
