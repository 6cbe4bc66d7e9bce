//! Unit tests for the to-do task module.

mod domain_tests;
mod repository_tests;
