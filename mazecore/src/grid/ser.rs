use serde::{Deserialize, Serialize};

use crate::{algorithms::AStar, array::Array2D, dims::Dims, error::MazeError};

use super::{Cell, CellWall, Grid, Walls};

/// Wire form of a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellExport {
    pub x: i32,
    pub y: i32,
    pub walls: Vec<CellWall>,
}

/// Whole grid on the wire, indexed `[x][y]`.
pub type MazeExport = Vec<Vec<CellExport>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl From<Dims> for Point {
    fn from(Dims(x, y): Dims) -> Self {
        Point { x, y }
    }
}

impl From<Point> for Dims {
    fn from(Point { x, y }: Point) -> Self {
        Dims(x, y)
    }
}

impl Grid {
    pub fn export(&self) -> MazeExport {
        let Dims(w, h) = self.size();
        (0..w)
            .map(|x| {
                (0..h)
                    .map(|y| {
                        let cell = &self.cells[Dims(x, y)];
                        CellExport {
                            x,
                            y,
                            walls: cell.wall_list(),
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Rebuilds a grid from its wire form.
    ///
    /// The result doesn't have to be a perfect maze, but its walls must come in pairs.
    pub fn from_export(export: &MazeExport) -> Result<Grid, MazeError> {
        let width = export.len();
        let height = export.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(MazeError::invalid_dimension(width, height));
        }
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(MazeError::invalid_dimension(width, height));
        }
        if let Some(x) = export.iter().position(|column| column.len() != height) {
            return Err(MazeError::MalformedExport(format!(
                "column {x} has {} cells, expected {height}",
                export[x].len()
            )));
        }

        let mut cells = Array2D::new(Cell::new(Dims::ZERO), width, height);
        for (x, column) in export.iter().enumerate() {
            for (y, entry) in column.iter().enumerate() {
                let pos = Dims(x as i32, y as i32);
                if Dims(entry.x, entry.y) != pos {
                    return Err(MazeError::MalformedExport(format!(
                        "cell at [{x}][{y}] claims to be at ({}, {})",
                        entry.x, entry.y
                    )));
                }

                let walls = entry
                    .walls
                    .iter()
                    .fold(Walls::empty(), |walls, wall| walls | wall.flag());
                cells[pos] = Cell::with_walls(pos, walls);
            }
        }

        let grid = Grid { cells };
        match grid.first_asymmetric_wall() {
            Some((pos, wall)) => Err(MazeError::AsymmetricWall(pos, wall)),
            None => Ok(grid),
        }
    }
}

impl Grid {
    /// Serializes the grid's export, pretty printed if asked for.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        let export = self.export();
        if pretty {
            serde_json::to_string_pretty(&export)
        } else {
            serde_json::to_string(&export)
        }
    }

    pub fn from_json(json: &str) -> Result<Grid, MazeError> {
        let export: MazeExport =
            serde_json::from_str(json).map_err(|e| MazeError::MalformedExport(e.to_string()))?;
        Self::from_export(&export)
    }
}

/// Request to solve an exported maze.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub maze: MazeExport,
    pub start: Point,
    pub goal: Point,
}

impl SolveRequest {
    /// Returns the path from start to goal, empty when the goal can't be reached.
    pub fn solve(&self) -> Result<Vec<Point>, MazeError> {
        let grid = Grid::from_export(&self.maze)?;
        match AStar::solve(&grid, self.start.into(), self.goal.into()) {
            Ok(path) => Ok(path.into_points()),
            Err(MazeError::NoPathFound) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }
}
