//! Unit tests for the command grammar engine.

mod help_tests;
mod links_tests;
mod support;
