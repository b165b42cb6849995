//! Integration tests for medpost-guard

mod analyzer_tests;
mod disclaimer_tests;
mod rules_file_tests;
