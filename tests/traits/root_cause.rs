use std::io;

use error_trail::traits::RootCause;
use error_trail::{new, AnyError, ErrorChain};

#[test]
fn chain_root_cause_is_root_message() {
    let err = new("root").wrap("one").wrap("two");
    assert_eq!(err.root_cause().unwrap().to_string(), "root");
}

#[test]
fn foreign_error_is_its_own_root_cause() {
    let err = io::Error::new(io::ErrorKind::TimedOut, "slow");

    let root = err.root_cause().unwrap();
    assert_eq!(root.downcast_ref::<io::Error>().unwrap().kind(), io::ErrorKind::TimedOut);
}

#[test]
fn any_error_delegates() {
    let foreign: AnyError = io::Error::other("x").into();
    assert_eq!(foreign.root_cause().unwrap().to_string(), "x");

    let chain: AnyError = ErrorChain::default().into();
    assert!(chain.root_cause().is_none());
}
