//! Request and response types for snapshot and query calls.

mod query;
mod snapshot;

pub use query::*;
pub use snapshot::*;

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
