//! Book endpoint tests

mod errors_test;
