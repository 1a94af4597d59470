//! Property-based tests for interval arithmetic.
