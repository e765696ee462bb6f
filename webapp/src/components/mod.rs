pub mod footer;
pub mod icons;
pub mod navigation;
pub mod project_tile;
