pub mod types;


#[cfg(feature = "tracing")]
pub mod tracing_ext;
