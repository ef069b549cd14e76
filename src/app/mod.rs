// latestlog - app/mod.rs
//
// Application layer: orchestration of a single run.
// Dependencies: core, platform.

pub mod finder;
