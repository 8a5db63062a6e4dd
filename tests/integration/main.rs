//! Integration tests driving the public library API

mod config_tests;
mod lending_tests;
mod shared_tests;
