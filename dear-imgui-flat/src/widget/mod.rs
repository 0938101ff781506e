//! Widget entry points, one file per family

pub mod button;
pub mod color;
pub mod combo;
pub mod drag;
pub mod input;
pub mod list_box;
pub mod selectable;
pub mod slider;
pub mod text;
pub mod tree;
