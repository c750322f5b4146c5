//! Registry Adapter Tests

mod constant_table_test;
