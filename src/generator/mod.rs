// ABOUTME: Generator module - the bounded tool orchestration loop.

mod generator;

pub use generator::*;
