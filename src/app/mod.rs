// LogTally - app/mod.rs
//
// Application layer: orchestration of the core pipeline.
// Dependencies: core layer.
// Must NOT depend on: platform specifics.

pub mod analyze;
