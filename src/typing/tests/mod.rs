//! Unit tests for the typing message context.
