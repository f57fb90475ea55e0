//! Utility functions and helpers for server operations.

pub mod range;
pub mod time;

#[cfg(test)]
pub mod test;
