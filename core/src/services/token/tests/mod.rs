//! Tests for the token service

#[cfg(test)]
mod codec_tests;
