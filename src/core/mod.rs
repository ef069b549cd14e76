// latestlog - core/mod.rs
//
// Core logic: pattern resolution, discovery, selection, rendering.
// Must NOT depend on: app, platform.

pub mod discovery;
pub mod model;
pub mod report;
pub mod resolver;
pub mod selector;
