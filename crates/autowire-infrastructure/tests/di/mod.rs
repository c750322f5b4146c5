//! Composition Root Tests

mod bootstrap_test;
