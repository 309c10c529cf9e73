// Blueprint - ui/panels/mod.rs

pub mod active_filters;
pub mod dashboard;
pub mod directory;
pub mod dock;
pub mod side_menu;
