//! Perfect maze generation and shortest path search on rectangular grids.
//!
//! A [`Grid`] starts fully walled, [`DepthFirstSearch`] carves it into a spanning tree and
//! [`AStar`] finds shortest paths through whatever walls are left. Grids travel over the wire
//! as [`MazeExport`], indexed `[x][y]`.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod grid;
pub mod progress;

pub use algorithms::{AStar, DepthFirstSearch, Path, Random, SolveStats};
pub use dims::Dims;
pub use error::{parse_size, MazeError};
pub use grid::{Cell, CellExport, CellWall, Grid, MazeExport, Point, SolveRequest};
pub use progress::{Progress, ProgressHandle};
