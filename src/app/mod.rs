// Blueprint - app/mod.rs
//
// Application layer: state management, navigation, catalog loading.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod catalog_mgr;
pub mod navigation;
pub mod state;
