//! Tests for the task service

#[cfg(test)]
mod service_tests;
