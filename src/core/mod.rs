// Blueprint - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library and serde only.
// Must NOT depend on: ui, platform, app, or any I/O directly.

pub mod catalog;
pub mod filter;
pub mod model;
pub mod view;
