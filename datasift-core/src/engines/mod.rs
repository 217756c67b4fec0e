// datasift-core/src/engines/mod.rs
//! Concrete `ExtractionEngine` implementations.
//!
//! `regex_engine` is the reference pipeline driven by the compiled Pattern Table.

pub mod regex_engine;
