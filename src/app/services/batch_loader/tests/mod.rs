//! Tests for the batch loader service

mod report_tests;
