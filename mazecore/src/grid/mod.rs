pub mod cell;
pub mod draw;
#[allow(clippy::module_inception)]
pub mod grid;
pub mod ser;

pub use cell::{Cell, CellWall, Walls};
pub use grid::{Grid, Neighbors};
pub use ser::{CellExport, MazeExport, Point, SolveRequest};
