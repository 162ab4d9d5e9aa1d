//! Test helpers shared by unit tests

pub mod fixtures;
