use criterion::Criterion;
use error_trail::ErrorChain;
use std::time::Duration;

#[derive(Debug)]
pub struct DbError(pub &'static str);

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "database error: {}", self.0)
    }
}

impl std::error::Error for DbError {}

pub fn configure_criterion() -> Criterion {
    Criterion::default().measurement_time(Duration::from_secs(3)).warm_up_time(Duration::from_secs(1))
}

/// A chain with `depth` entries.
pub fn chain_of_depth(depth: usize) -> ErrorChain {
    let mut err = ErrorChain::new("connection pool exhausted");
    for i in 1..depth {
        err.push(format_args!("layer {}", i));
    }
    err
}
