use std::fmt;
use std::io;

use error_trail::{AnyError, BoxError, ErrorChain, RootCause};

#[derive(Debug)]
struct Refused;

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection refused")
    }
}

impl std::error::Error for Refused {}

#[test]
fn foreign_errors_convert_into_foreign_variant() {
    let err: AnyError = Refused.into();

    assert!(!err.is_chain());
    assert!(matches!(err, AnyError::Foreign(_)));
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn chains_convert_into_chain_variant() {
    let err: AnyError = ErrorChain::new("root").into();

    assert!(err.is_chain());
    match err {
        AnyError::Chain(chain) => assert_eq!(chain.depth(), 1),
        AnyError::Foreign(_) => panic!("expected a chain"),
    }
}

#[test]
fn from_boxed_recovers_boxed_chains() {
    let boxed = ErrorChain::new("root").wrap("context").into_boxed_error();

    match AnyError::from_boxed(boxed) {
        AnyError::Chain(chain) => {
            assert_eq!(chain.depth(), 2);
            assert_eq!(chain.msg(1), "context");
        },
        AnyError::Foreign(_) => panic!("boxed chain should be recognized"),
    }
}

#[test]
fn from_boxed_keeps_foreign_errors_foreign() {
    let boxed: BoxError = Box::new(io::Error::other("eof"));

    let err = AnyError::from_boxed(boxed);
    assert!(!err.is_chain());
    assert_eq!(err.root_cause().unwrap().to_string(), "eof");
}

#[test]
fn root_cause_of_chain_variant_is_root_entry() {
    let err: AnyError = ErrorChain::new("deep").wrap("shallow").into();

    assert_eq!(err.root_cause().unwrap().to_string(), "deep");
}

#[test]
fn chain_from_any_error_backfills_foreign() {
    let any: AnyError = Refused.into();
    let chain = ErrorChain::from(any);

    assert_eq!(chain.depth(), 1);
    assert_eq!(chain.msg(0), "connection refused");
    assert!(chain.root().unwrap().source().is_some());
}
