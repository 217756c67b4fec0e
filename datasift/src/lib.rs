// datasift/src/lib.rs
//! # datasift CLI Application
//!
//! Command-line front end for `datasift-core`: reads a text report, runs the extraction
//! pipeline and writes the resulting category mapping as JSON.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod sample;
pub mod ui;
