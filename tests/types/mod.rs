use error_trail::{ChainResult, ErrorChain, ErrorVec};

pub mod any_error;

#[test]
fn error_vec_keeps_first_entry_inline() {
    let mut v: ErrorVec<u8> = ErrorVec::new();
    v.push(1);
    assert!(!v.spilled());
    v.push(2);
    assert!(v.spilled());
}

#[test]
fn chain_result_alias_carries_chain() {
    fn fail() -> ChainResult<u8> {
        Err(ErrorChain::new("nope"))
    }

    let err = fail().unwrap_err();
    assert_eq!(err.msg(0), "nope");
}
