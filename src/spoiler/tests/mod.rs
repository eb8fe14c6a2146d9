//! Unit tests for the automatic spoiler context.
