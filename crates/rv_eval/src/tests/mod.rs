//! Unit tests for the evaluator, one file per module.

mod operators_tests;
mod sampler_tests;
