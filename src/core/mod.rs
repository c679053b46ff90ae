// LogTally - core/mod.rs
//
// Core business logic layer: parse -> aggregate -> filter -> render.
// Dependencies: standard library (plus tracing for diagnostics).
// Must NOT depend on: platform, app, or any I/O.

pub mod aggregate;
pub mod filter;
pub mod model;
pub mod parser;
pub mod report;
