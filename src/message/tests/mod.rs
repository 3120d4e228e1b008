//! Unit tests for the message module.
//!
//! Tests go through the public parse and stringify entry points so that the
//! ordering of the validation passes is checked end to end.
