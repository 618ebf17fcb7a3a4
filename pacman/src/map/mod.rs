//! Maze layouts, parsing, and the cell grid itself.

pub mod direction;
pub mod layouts;
pub mod maze;
pub mod parser;
pub mod render;
