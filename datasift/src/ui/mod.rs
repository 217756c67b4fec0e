//! Console presentation: colored status messages and the extraction report.

pub mod output_format;
pub mod report;
