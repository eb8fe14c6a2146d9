//! Unit tests for the automatic reaction context.

mod command_tests;
