/// Utility for creating mock trait implementations.
#[cfg(test)]
pub mod mock;
