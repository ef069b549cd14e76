// latestlog - platform/mod.rs
//
// Platform abstraction layer: home directory and config directory lookup.
// Dependencies: directories crate, core::report for the output format.
// Must NOT depend on: app.

pub mod config;
pub mod home;
