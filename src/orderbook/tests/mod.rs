//! Crate-internal scenario tests with access to the structural consistency
//! checker.

mod validation_tests;
