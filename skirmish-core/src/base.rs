//! Core abstractions.
mod env;
mod value_fn;
pub use env::Env;
pub use value_fn::ValueFn;
