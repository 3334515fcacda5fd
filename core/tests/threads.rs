//! Iterating the same `Tokenizer` from multiple threads at once.

use std::thread;

use semitok_core::Tokenizer;

use semitok_shared_tests::utils::{TRICKY_INPUTS, texts};


#[test]
fn concurrent_iterations() {
    let input = "@(Compile->'%(Filename).obj;%(Extension)', ' ; ');$(Out);;@(None);a;(b;c";
    let expected = texts(input);
    let tokenizer = &Tokenizer::new(input);
    thread::scope(|scope| {
        let handles: Vec<_> = (0 .. 8).map(|_| scope.spawn(move || {
            tokenizer.iter().map(|f| f.as_str()).collect::<Vec<_>>()
        })).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn shared_tokenizers() {
    let tokenizers: Vec<_> = TRICKY_INPUTS.iter().map(|&s| Tokenizer::new(s)).collect();
    thread::scope(|scope| {
        for t in &tokenizers {
            let _ = scope.spawn(move || {
                assert_eq!(t.iter().map(|f| f.as_str()).collect::<Vec<_>>(),
                           texts(t.expression().as_str()));
            });
        }
    });
}
