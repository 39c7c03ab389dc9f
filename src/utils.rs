//! Internal utilities.

#[cfg(test)]
pub mod tester;
